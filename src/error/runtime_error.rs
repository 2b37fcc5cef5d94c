use crate::interpreter::value::core::Rank;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero, or a rational literal with a zero
    /// denominator.
    DivisionByZero,
    /// Attempted an integer modulo by zero.
    ModuloByZero,
    /// A shift count was negative or did not fit a native unsigned integer.
    IllegalShiftCount {
        /// The rendered shift count.
        count: String,
    },
    /// Raised a value to a negative power.
    NegativeExponentUnsupported,
    /// The operator has no implementation at the rank its operands were
    /// promoted to, for example `mod` on rationals.
    UnsupportedOperation {
        /// The operator symbol.
        op:   String,
        /// The rank the operands were promoted to.
        rank: Rank,
    },
    /// The operator symbol is not known.
    UnknownOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// Two vectors of different lengths, neither of length one, were combined
    /// elementwise.
    LengthMismatch {
        /// Length of the left vector.
        left:  usize,
        /// Length of the right vector.
        right: usize,
    },
    /// Tried to access a vector element outside the allowed bounds.
    IndexOutOfRange {
        /// The rendered index that was requested.
        index: String,
        /// The length of the indexed vector.
        len:   usize,
    },
    /// Tried to convert a value to a lower rank than it has, which would lose
    /// information.
    BadConversion {
        /// The rank of the value.
        from: Rank,
        /// The requested rank.
        to:   Rank,
    },
    /// The text of a numeric literal could not be read.
    InvalidLiteral {
        /// The literal text.
        text: String,
    },
    /// An argument was outside the domain of the operator.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "{name} undefined."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ModuloByZero => write!(f, "Modulo by zero."),
            Self::IllegalShiftCount { count } => write!(f, "Illegal shift count {count}."),
            Self::NegativeExponentUnsupported => write!(f, "Negative exponent not implemented."),
            Self::UnsupportedOperation { op, rank } => {
                write!(f, "Operator {op} is not defined for {rank} values.")
            },
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator {symbol}."),
            Self::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: {left} {right}.")
            },
            Self::IndexOutOfRange { index, len } => write!(f,
                                                           "Index {index} out of range for vector of length {len}."),
            Self::BadConversion { from, to } => write!(f, "Cannot convert {from} to {to}."),
            Self::InvalidLiteral { text } => write!(f, "Invalid number {text:?}."),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
