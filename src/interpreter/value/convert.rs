use std::rc::Rc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Rank, Value},
    },
};

impl Value {
    /// Promotes the value to the requested rank.
    ///
    /// Scalars move up the lattice exactly; a scalar converted to a vector
    /// becomes a vector of length one. Asking for a lower rank than the value
    /// has is never done implicitly: a vector does not become a scalar and a
    /// rational is never truncated to an integer.
    ///
    /// # Errors
    /// Returns `RuntimeError::BadConversion` for any narrowing conversion.
    ///
    /// # Example
    /// ```
    /// use vecalc::interpreter::value::core::{Rank, Value};
    ///
    /// let v = Value::SmallInt(3).convert(Rank::Vector).unwrap();
    /// assert_eq!(v, Value::from(vec![Value::SmallInt(3)]));
    ///
    /// let half = vecalc::interpreter::value::parse::parse_value("1/2").unwrap();
    /// assert!(half.convert(Rank::BigInt).is_err());
    /// ```
    pub fn convert(&self, target: Rank) -> EvalResult<Self> {
        use Value::{BigInt as Big, BigRational as Rat, SmallInt, Vector};

        match (self, target) {
            (_, t) if t == self.rank() => Ok(self.clone()),
            (SmallInt(n), Rank::BigInt) => Ok(Big(BigInt::from(*n))),
            (SmallInt(n), Rank::BigRational) => {
                Ok(Rat(BigRational::from_integer(BigInt::from(*n))))
            },
            (Big(n), Rank::BigRational) => Ok(Rat(BigRational::from_integer(n.clone()))),
            (SmallInt(_) | Big(_) | Rat(_), Rank::Vector) => {
                Ok(Vector(Rc::new(vec![self.clone()])))
            },
            _ => {
                trace!(from = %self.rank(), to = %target, "rejected narrowing conversion");
                Err(RuntimeError::BadConversion { from: self.rank(),
                                                  to:   target, })
            },
        }
    }

    /// Returns the value in its minimal exact representation.
    ///
    /// A `BigInt` that fits an `i64` becomes a `SmallInt`, a rational with
    /// denominator one becomes an integer, and vectors shrink each element.
    /// The operation is idempotent and never raises the rank.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use vecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::BigInt(BigInt::from(42)).shrink(), Value::SmallInt(42));
    /// ```
    #[must_use]
    pub fn shrink(self) -> Self {
        match self {
            Self::SmallInt(_) => self,
            Self::BigInt(n) => n.to_i64().map_or(Self::BigInt(n), Self::SmallInt),
            Self::BigRational(r) => {
                if r.is_integer() {
                    Self::BigInt(r.to_integer()).shrink()
                } else {
                    Self::BigRational(r)
                }
            },
            Self::Vector(v) => Rc::unwrap_or_clone(v).into_iter()
                                                     .map(Self::shrink)
                                                     .collect::<Vec<_>>()
                                                     .into(),
        }
    }
}
