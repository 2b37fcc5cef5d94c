use num_bigint::BigInt;
use num_rational::BigRational;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Defines the three per-rank implementations of a comparison operator.
/// Each returns 1 when the relation holds and 0 otherwise.
macro_rules! comparison {
    ($small:ident, $big:ident, $rational:ident, $op:tt) => {
        pub fn $small(a: i64, b: i64) -> EvalResult<Value> {
            Ok(Value::from(a $op b))
        }

        pub fn $big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
            Ok(Value::from(a $op b))
        }

        pub fn $rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
            Ok(Value::from(a $op b))
        }
    };
}

comparison!(eq_small, eq_big, eq_rational, ==);
comparison!(ne_small, ne_big, ne_rational, !=);
comparison!(lt_small, lt_big, lt_rational, <);
comparison!(le_small, le_big, le_rational, <=);
comparison!(gt_small, gt_big, gt_rational, >);
comparison!(ge_small, ge_big, ge_rational, >=);

// `min` and `max` hand back one of their operands unchanged; on a tie the
// right operand wins.

pub fn min_small(a: i64, b: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(if a < b { a } else { b }))
}

pub fn min_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(if a < b { a } else { b }.clone()))
}

pub fn min_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(if a < b { a } else { b }.clone()))
}

pub fn max_small(a: i64, b: i64) -> EvalResult<Value> {
    Ok(Value::SmallInt(if a > b { a } else { b }))
}

pub fn max_big(a: &BigInt, b: &BigInt) -> EvalResult<Value> {
    Ok(Value::BigInt(if a > b { a } else { b }.clone()))
}

pub fn max_rational(a: &BigRational, b: &BigRational) -> EvalResult<Value> {
    Ok(Value::BigRational(if a > b { a } else { b }.clone()))
}
