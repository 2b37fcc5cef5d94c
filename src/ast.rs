use crate::interpreter::value::core::Value;

/// A binary operator.
///
/// Every binary operator shares one precedence level and associates to the
/// right. `Index` is the reserved operator built by the parser for `x[i]`; it
/// has no spelling of its own in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, exact rational division.
    Quo,
    /// `idiv`, truncating integer division.
    Idiv,
    /// `imod`, remainder of truncating division.
    Imod,
    /// `div`, Euclidean integer division.
    Div,
    /// `mod`, Euclidean modulus.
    Mod,
    /// `**`
    Pow,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Lsh,
    /// `>>`
    Rsh,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `[]`, element selection.
    Index,
}

const BINARY_OPERATORS: [BinaryOperator; 23] = {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Idiv, Imod, Index, Less, LessEqual, Lsh, Max,
        Min, Mod, Mul, NotEqual, Or, Pow, Quo, Rsh, Sub, Xor,
    };
    [Add, Sub, Mul, Quo, Idiv, Imod, Div, Mod, Pow, And, Or, Xor, Lsh, Rsh, Equal, NotEqual,
     Less, LessEqual, Greater, GreaterEqual, Min, Max, Index]
};

impl BinaryOperator {
    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Idiv => "idiv",
            Self::Imod => "imod",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "**",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Lsh => "<<",
            Self::Rsh => ">>",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Min => "min",
            Self::Max => "max",
            Self::Index => "[]",
        }
    }

    /// Looks an operator up by its spelling.
    ///
    /// # Example
    /// ```
    /// use vecalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("idiv"), Some(BinaryOperator::Idiv));
    /// assert_eq!(BinaryOperator::from_symbol("iota"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BINARY_OPERATORS.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, identity.
    Plus,
    /// `-`, negation.
    Negate,
    /// `/`, reciprocal.
    Reciprocal,
    /// `^`, bitwise complement.
    Complement,
    /// `abs`
    Abs,
    /// `sgn`, sign as -1, 0 or 1.
    Sign,
    /// `not`, 1 for zero and 0 otherwise.
    Not,
    /// `floor`
    Floor,
    /// `ceil`
    Ceil,
    /// `iota n`, the first `n` integers counting from the index origin.
    Iota,
}

const UNARY_OPERATORS: [UnaryOperator; 10] = {
    use UnaryOperator::{Abs, Ceil, Complement, Floor, Iota, Negate, Not, Plus, Reciprocal, Sign};
    [Plus, Negate, Reciprocal, Complement, Abs, Sign, Not, Floor, Ceil, Iota]
};

impl UnaryOperator {
    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Reciprocal => "/",
            Self::Complement => "^",
            Self::Abs => "abs",
            Self::Sign => "sgn",
            Self::Not => "not",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Iota => "iota",
        }
    }

    /// Looks an operator up by its spelling.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        UNARY_OPERATORS.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reports whether a word is spelled like an operator (`idiv`, `iota`, ...)
/// and therefore cannot name a variable.
#[must_use]
pub fn is_operator_word(word: &str) -> bool {
    BinaryOperator::from_symbol(word).is_some() || UnaryOperator::from_symbol(word).is_some()
}

/// The expression built for one line of input.
///
/// Operands are resolved to values while parsing (variables are looked up as
/// soon as they are read), so a tree is only ever a short-lived shape over
/// values. It is evaluated right after the line is parsed and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal or the current value of a variable.
    Value(Value),
    /// A prefix operator applied to an operand.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A binary operator applied to two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Renders the expression as a fully parenthesized tree, tagging each
    /// value with its kind. Used by the `parse` debug flag.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::{BinaryOperator, Expr, UnaryOperator},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let expr = Expr::Binary { op:    BinaryOperator::Add,
    ///                           left:  Box::new(Expr::Value(Value::SmallInt(1))),
    ///                           right: Box::new(Expr::Unary { op:      UnaryOperator::Negate,
    ///                                                         operand:
    ///                                                             Box::new(Expr::Value(Value::SmallInt(2))), }), };
    /// assert_eq!(expr.tree(), "(<1> + (- <2>))");
    /// ```
    #[must_use]
    pub fn tree(&self) -> String {
        match self {
            Self::Value(value @ Value::SmallInt(_)) => format!("<{value}>"),
            Self::Value(value @ Value::BigInt(_)) => format!("<big {value}>"),
            Self::Value(value @ Value::BigRational(_)) => format!("<rat {value}>"),
            Self::Value(value @ Value::Vector(_)) => format!("<vec {value}>"),
            Self::Unary { op, operand } => format!("({op} {})", operand.tree()),
            Self::Binary { op, left, right } => {
                format!("({} {op} {})", left.tree(), right.tree())
            },
        }
    }
}
