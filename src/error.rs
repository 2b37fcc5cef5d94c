/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into an
/// expression: unexpected tokens, missing closing brackets and tokens the
/// lexer could not recognize.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression.
/// Runtime errors include things like division by zero, illegal shift counts,
/// vector length mismatches or illegal narrowing conversions.
pub mod runtime_error;
/// Located diagnostics.
///
/// Wraps a parse or runtime error with the file name and line number it was
/// detected on. This is the single line reported to the user when a line of
/// input fails.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, ErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
