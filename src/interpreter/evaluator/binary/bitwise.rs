use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{MAX_RESULT_BITS, shift_count},
};

// Big-integer bitwise operators act on the infinite two's-complement form, so
// they agree with the native ones on every value that fits an `i64`.

pub fn and_small(a: i64, b: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(a & b))
}

pub fn and_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a & b))
}

pub fn or_small(a: i64, b: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(a | b))
}

pub fn or_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a | b))
}

pub fn xor_small(a: i64, b: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(a ^ b))
}

pub fn xor_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(a ^ b))
}

/// Left shift. Shifts always run on big integers so no bits are lost.
///
/// A shift whose result would be wider than `MAX_RESULT_BITS` is refused with
/// `RuntimeError::IllegalShiftCount`. Zero shifts by any count.
pub fn lsh_big(a: &BigInt, count: &BigInt) -> EvalResult<Value> {
    let shift = shift_count(count)?;
    if a.is_zero() {
        return Ok(Value::SmallInt(0));
    }

    let bits = u64::try_from(shift).map_or(u64::MAX, |s| s.saturating_add(a.bits()));
    if bits > MAX_RESULT_BITS {
        return Err(RuntimeError::IllegalShiftCount { count: count.to_string() });
    }

    Ok(Value::BigInt(a << shift))
}

/// Arithmetic right shift, rounding toward negative infinity.
///
/// Shifting out every bit leaves 0, or -1 for a negative value, whatever the
/// size of the count.
pub fn rsh_big(a: &BigInt, count: &BigInt) -> EvalResult<Value> {
    if count.is_negative() {
        return Err(RuntimeError::IllegalShiftCount { count: count.to_string() });
    }
    if *count >= BigInt::from(a.bits()) {
        return Ok(Value::SmallInt(if a.is_negative() { -1 } else { 0 }));
    }

    Ok(Value::BigInt(a >> shift_count(count)?))
}
