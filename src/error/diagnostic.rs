use crate::error::{ParseError, RuntimeError};

/// Either kind of failure that can abandon a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The line parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for ErrorKind {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<RuntimeError> for ErrorKind {
    fn from(err: RuntimeError) -> Self {
        Self::Runtime(err)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

/// A failure located in the input: file name, line number and the error.
///
/// Renders as `file:line: message`.
///
/// # Example
/// ```
/// use vecalc::error::{Diagnostic, RuntimeError};
///
/// let diagnostic = Diagnostic::new("<stdin>", 3, RuntimeError::DivisionByZero.into());
/// assert_eq!(diagnostic.to_string(), "<stdin>:3: Division by zero.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the token source the line came from.
    pub file: String,
    /// Line the failure was detected on.
    pub line: usize,
    /// What went wrong.
    pub kind: ErrorKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(file: &str, line: usize, kind: ErrorKind) -> Self {
        Self { file: file.to_string(),
               line,
               kind }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.kind)
    }
}

impl std::error::Error for Diagnostic {}
