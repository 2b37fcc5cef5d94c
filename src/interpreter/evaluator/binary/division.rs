use num_bigint::BigInt;
use num_traits::{Euclid, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Truncating division: the quotient rounds toward zero.
///
/// `i64::MIN idiv -1` does not fit an `i64` and is recomputed on big integers.
pub fn idiv_small(a: i64, b: i64) -> EvalResult<Value> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    a.checked_div(b)
     .map_or_else(|| idiv_big(&BigInt::from(a), &BigInt::from(b)), |q| Ok(Value::SmallInt(q)))
}

pub fn idiv_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::BigInt(a / b))
}

/// Remainder of truncating division; takes the sign of the dividend.
pub fn imod_small(a: i64, b: i64) -> EvalResult<Value> {
    if b == 0 {
        return Err(RuntimeError::ModuloByZero);
    }

    // Only `i64::MIN imod -1` overflows, and its remainder is zero.
    Ok(Value::SmallInt(a.checked_rem(b).unwrap_or(0)))
}

pub fn imod_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    if b.is_zero() {
        return Err(RuntimeError::ModuloByZero);
    }

    Ok(Value::BigInt(a % b))
}

/// Euclidean division: `a == (a div b) * b + (a mod b)` with a non-negative
/// remainder.
pub fn div_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::BigInt(a.div_euclid(b)))
}

/// Euclidean modulus, always in `0 .. |b|`.
pub fn mod_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    if b.is_zero() {
        return Err(RuntimeError::ModuloByZero);
    }

    Ok(Value::BigInt(a.rem_euclid(b)))
}
