#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Found a token that may not follow a complete operand.
    UnexpectedAfterExpression {
        /// The token encountered.
        token: String,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead.
        found: String,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The token found instead.
        found: String,
    },
    /// The token source could not make sense of the input text.
    InvalidToken {
        /// The offending text.
        text: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Unexpected {token}."),
            Self::UnexpectedAfterExpression { token } => {
                write!(f, "Unexpected {token} after expression.")
            },
            Self::ExpectedClosingParen { found } => {
                write!(f, "Expected closing parenthesis ')', found {found}.")
            },
            Self::ExpectedClosingBracket { found } => {
                write!(f, "Expected closing bracket ']', found {found}.")
            },
            Self::InvalidToken { text } => write!(f, "Invalid token {text:?}."),
        }
    }
}

impl std::error::Error for ParseError {}
