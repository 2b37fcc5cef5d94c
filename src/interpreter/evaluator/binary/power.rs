use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{checked_pow, exponent_to_u32},
};

/// Integer exponentiation.
///
/// Any base to the power 0 is 1, including 0. Negative exponents are
/// rejected rather than producing a rational.
///
/// # Errors
/// - `RuntimeError::NegativeExponentUnsupported` for a negative exponent.
/// - `RuntimeError::InvalidArgument` for an exponent too large to compute or
///   a result wider than `MAX_RESULT_BITS`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use vecalc::interpreter::{evaluator::binary::power::pow_big, value::core::Value};
///
/// let v = pow_big(&BigInt::from(2), &BigInt::from(10)).unwrap();
/// assert_eq!(v, Value::BigInt(BigInt::from(1024)));
/// ```
pub fn pow_big(base: &BigInt, exponent: &BigInt) -> EvalResult<Value> {
    if exponent.is_zero() {
        return Ok(Value::SmallInt(1));
    }
    let exponent = exponent_to_u32(exponent)?;

    Ok(Value::BigInt(checked_pow(base, exponent)?))
}

/// Raises a rational to an integral power by raising numerator and
/// denominator separately.
///
/// The exponent arrives as a rational only because the base forced the
/// promotion; it must still be a whole number.
///
/// # Errors
/// - `RuntimeError::InvalidArgument` if the exponent is fractional or too
///   large.
/// - `RuntimeError::NegativeExponentUnsupported` for a negative exponent.
pub fn pow_rational(base: &BigRational, exponent: &BigRational) -> EvalResult<Value> {
    if !exponent.is_integer() {
        return Err(RuntimeError::InvalidArgument { details: format!("fractional exponent {exponent}") });
    }
    if exponent.is_zero() {
        return Ok(Value::SmallInt(1));
    }
    let exponent = exponent_to_u32(&exponent.to_integer())?;

    Ok(Value::BigRational(BigRational::new(checked_pow(base.numer(), exponent)?,
                                           checked_pow(base.denom(), exponent)?)))
}
