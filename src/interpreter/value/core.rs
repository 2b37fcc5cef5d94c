use std::rc::Rc;

use num_bigint::BigInt;
use num_rational::BigRational;

/// Position of a value kind in the promotion lattice.
///
/// Binary operators promote both operands to a common rank chosen from the
/// ranks of the operands; the ordering of the variants is that lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Native 64-bit signed integer.
    SmallInt,
    /// Arbitrary-precision integer.
    BigInt,
    /// Arbitrary-precision rational in lowest terms.
    BigRational,
    /// Ordered sequence of values.
    Vector,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmallInt => write!(f, "int"),
            Self::BigInt => write!(f, "big int"),
            Self::BigRational => write!(f, "rational"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

/// Represents a runtime value in the calculator.
///
/// Values are immutable once built; every operator produces a new value. After
/// any arithmetic the result is shrunk, so a `BigInt` always lies outside the
/// `i64` range and a `BigRational` always has a denominator other than one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A native integer (64 bit).
    SmallInt(i64),
    /// An integer too large for `SmallInt`.
    BigInt(BigInt),
    /// An exact fraction. `num-rational` keeps it reduced with a positive
    /// denominator.
    BigRational(BigRational),
    /// A vector of values. Elements are normally scalars but may themselves be
    /// vectors.
    Vector(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::SmallInt(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<BigRational> for Value {
    fn from(v: BigRational) -> Self {
        Self::BigRational(v)
    }
}

/// Truth values are the integers 1 and 0.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::SmallInt(i64::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl Value {
    /// Returns the promotion rank of the value.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        match self {
            Self::SmallInt(_) => Rank::SmallInt,
            Self::BigInt(_) => Rank::BigInt,
            Self::BigRational(_) => Rank::BigRational,
            Self::Vector(_) => Rank::Vector,
        }
    }
}

/// Canonical rendering: integers in decimal, rationals as `n/d`, vectors as
/// their elements separated by single spaces.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmallInt(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::BigRational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Vector(v) => {
                for (index, value) in v.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                Ok(())
            },
        }
    }
}
