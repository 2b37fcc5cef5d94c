use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

// Native arithmetic falls back to big integers on overflow instead of
// wrapping.

pub fn add_small(a: i64, b: i64) -> EvalResult<Value> {
    a.checked_add(b)
     .map_or_else(|| add_big(&BigInt::from(a), &BigInt::from(b)), |n| Ok(Value::SmallInt(n)))
}

pub fn add_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a + b))
}

pub fn add_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a + b))
}

pub fn sub_small(a: i64, b: i64) -> EvalResult<Value> {
    a.checked_sub(b)
     .map_or_else(|| sub_big(&BigInt::from(a), &BigInt::from(b)), |n| Ok(Value::SmallInt(n)))
}

pub fn sub_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a - b))
}

pub fn sub_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a - b))
}

pub fn mul_small(a: i64, b: i64) -> EvalResult<Value> {
    a.checked_mul(b)
     .map_or_else(|| mul_big(&BigInt::from(a), &BigInt::from(b)), |n| Ok(Value::SmallInt(n)))
}

pub fn mul_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a * b))
}

pub fn mul_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(a * b))
}

/// Exact division. Operands always arrive as rationals.
pub fn quo_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::BigRational(a / b))
}
