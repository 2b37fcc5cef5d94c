use std::rc::Rc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Rank, Value},
    },
    util::num::usize_to_i64_checked,
};

/// A unary operator's type-selection rule and per-rank implementations.
///
/// Mirrors the binary tables: a missing implementation means the operator is
/// undefined at that rank, and vectors are always handled elementwise.
pub struct UnaryOp {
    /// Picks the rank the operand is promoted to.
    pub which_type: fn(Rank) -> Rank,
    /// `SmallInt` implementation.
    pub small:      Option<fn(i64) -> EvalResult<Value>>,
    /// `BigInt` implementation.
    pub big:        Option<fn(&BigInt) -> EvalResult<Value>>,
    /// `BigRational` implementation.
    pub rational:   Option<fn(&BigRational) -> EvalResult<Value>>,
}

const fn same_type(rank: Rank) -> Rank {
    rank
}

fn rational_type(rank: Rank) -> Rank {
    Rank::BigRational.max(rank)
}

fn identity_small(a: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(a))
}

fn identity_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a.clone()))
}

fn identity_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a.clone()))
}

/// `-i64::MIN` does not fit an `i64` and is negated as a big integer.
fn neg_small(a: i64) -> EvalResult<Value> {
    Ok(a.checked_neg().map_or_else(|| Value::BigInt(-BigInt::from(a)), Value::SmallInt))
}

fn neg_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(-a))
}

fn neg_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(-a))
}

fn recip_rational(a: &BigRational) -> EvalResult<Value> {
    if a.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::BigRational(a.recip()))
}

fn complement_small(a: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(!a))
}

fn complement_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(!a))
}

fn abs_small(a: i64) -> EvalResult<Value> {
    Ok(a.checked_abs().map_or_else(|| Value::BigInt(BigInt::from(a).abs()), Value::SmallInt))
}

fn abs_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a.abs()))
}

fn abs_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a.abs()))
}

fn sign_small(a: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(a.signum()))
}

fn sign_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a.signum()))
}

fn sign_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a.signum()))
}

fn not_small(a: i64) -> EvalResult<Value> {
    Ok(Value::from(a == 0))
}

fn not_big(a: &BigInt) -> EvalResult<Value> {
    Ok(Value::from(a.is_zero()))
}

fn not_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::from(a.is_zero()))
}

fn floor_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a.floor()))
}

fn ceil_rational(a: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a.ceil()))
}

macro_rules! unary_op {
    ($name:ident, $which:expr, $small:expr, $big:expr, $rational:expr $(,)?) => {
        static $name: UnaryOp = UnaryOp { which_type: $which,
                                          small:      $small,
                                          big:        $big,
                                          rational:   $rational, };
    };
}

unary_op!(PLUS, same_type, Some(identity_small), Some(identity_big), Some(identity_rational));
unary_op!(NEGATE, same_type, Some(neg_small), Some(neg_big), Some(neg_rational));
unary_op!(RECIPROCAL, rational_type, None, None, Some(recip_rational));
unary_op!(COMPLEMENT, same_type, Some(complement_small), Some(complement_big), None);
unary_op!(ABS, same_type, Some(abs_small), Some(abs_big), Some(abs_rational));
unary_op!(SIGN, same_type, Some(sign_small), Some(sign_big), Some(sign_rational));
unary_op!(NOT, same_type, Some(not_small), Some(not_big), Some(not_rational));
// Integers are already whole, so rounding them is the identity.
unary_op!(FLOOR, same_type, Some(identity_small), Some(identity_big), Some(floor_rational));
unary_op!(CEIL, same_type, Some(identity_small), Some(identity_big), Some(ceil_rational));

impl UnaryOperator {
    /// Returns the operator's table entry.
    ///
    /// `Iota` has none: it builds a vector from a count and is not applied
    /// elementwise.
    #[must_use]
    pub fn table(self) -> Option<&'static UnaryOp> {
        Some(match self {
                 Self::Plus => &PLUS,
                 Self::Negate => &NEGATE,
                 Self::Reciprocal => &RECIPROCAL,
                 Self::Complement => &COMPLEMENT,
                 Self::Abs => &ABS,
                 Self::Sign => &SIGN,
                 Self::Not => &NOT,
                 Self::Floor => &FLOOR,
                 Self::Ceil => &CEIL,
                 Self::Iota => return None,
             })
    }
}

impl Context {
    /// Evaluates a prefix operation on a value.
    ///
    /// Vectors apply the operator to each element in order. The result is
    /// shrunk like every binary result.
    ///
    /// # Errors
    /// - `RuntimeError::UnsupportedOperation` if the operator is undefined at
    ///   the operand's rank, for example `^` on a rational.
    /// - `RuntimeError::DivisionByZero` for the reciprocal of zero.
    /// - `RuntimeError::InvalidArgument` for `iota` of a negative count.
    ///
    /// # Example
    /// ```
    /// use vecalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    ///
    /// let v = context.eval_unary(UnaryOperator::Negate, &Value::SmallInt(5)).unwrap();
    /// assert_eq!(v, Value::SmallInt(-5));
    ///
    /// let v = context.eval_unary(UnaryOperator::Reciprocal, &Value::SmallInt(4)).unwrap();
    /// assert_eq!(v.to_string(), "1/4");
    ///
    /// let v = context.eval_unary(UnaryOperator::Iota, &Value::SmallInt(3)).unwrap();
    /// assert_eq!(v.to_string(), "0 1 2");
    /// ```
    pub fn eval_unary(&self, op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let Some(table) = op.table() else {
            return self.eval_iota(value);
        };

        let rank = (table.which_type)(value.rank());
        trace!(%op, operand = %value.rank(), %rank, "unary dispatch");

        if let Value::Vector(elements) = value {
            let elements = elements.iter()
                                   .map(|element| self.eval_unary(op, element))
                                   .collect::<EvalResult<Vec<_>>>()?;
            return Ok(Value::Vector(Rc::new(elements)));
        }

        let value = value.convert(rank)?;
        let result = match &value {
            Value::SmallInt(a) => table.small.map(|f| f(*a)),
            Value::BigInt(a) => table.big.map(|f| f(a)),
            Value::BigRational(a) => table.rational.map(|f| f(a)),
            Value::Vector(_) => None,
        };

        let value = result.ok_or_else(|| RuntimeError::UnsupportedOperation { op: op.to_string(),
                                                                              rank })??;

        Ok(value.shrink())
    }

    /// `iota n`: the vector `origin, origin + 1, ..., origin + n - 1`.
    fn eval_iota(&self, value: &Value) -> EvalResult<Value> {
        let Value::SmallInt(n) = *value else {
            return Err(RuntimeError::UnsupportedOperation { op:   UnaryOperator::Iota.to_string(),
                                                            rank: value.rank(), });
        };
        if n < 0 {
            return Err(RuntimeError::InvalidArgument { details: format!("iota of negative count {n}") });
        }

        let origin = usize_to_i64_checked(self.config().origin())?;
        let end = origin.checked_add(n)
                        .ok_or_else(|| RuntimeError::InvalidArgument { details: format!("iota {n} is too large") })?;

        Ok((origin..end).map(Value::SmallInt).collect::<Vec<_>>().into())
    }
}
