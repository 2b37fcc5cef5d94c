/// The `Value` enum and its promotion `Rank`.
///
/// Declares the four value kinds of the numeric tower, their conversions from
/// native and big-number types, and their canonical rendering.
pub mod core;
/// Promotion and canonicalization.
///
/// `convert` lifts a value to a requested rank; `shrink` brings a value back
/// down to the lowest rank that represents it exactly.
pub mod convert;
/// Literal parsing.
///
/// Turns the text of a number or rational token into a minimal `Value`.
pub mod parse;
/// Configured rendering.
///
/// Formats values with the number and rational format strings held by the
/// configuration.
pub mod format;
