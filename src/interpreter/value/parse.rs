use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Rank, Value},
    },
    util::num::{parse_big_integer, parse_decimal},
};

/// Parses the text of a numeric literal into a minimal `Value`.
///
/// Integers become a `SmallInt` when they fit and a `BigInt` otherwise.
/// Decimal and exponent forms are read exactly as rationals. A rational
/// literal `a/b` parses both sides independently and divides them exactly;
/// the common case of two native integers takes a fast path.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if the denominator is zero.
/// - `RuntimeError::InvalidLiteral` if the text is not a number.
///
/// # Example
/// ```
/// use vecalc::interpreter::value::{core::Value, parse::parse_value};
///
/// assert_eq!(parse_value("42").unwrap(), Value::SmallInt(42));
/// assert_eq!(parse_value("4/2").unwrap(), Value::SmallInt(2));
/// assert_eq!(parse_value("2/6").unwrap().to_string(), "1/3");
/// assert!(parse_value("1/0").is_err());
/// ```
pub fn parse_value(text: &str) -> EvalResult<Value> {
    if let Some((numerator, denominator)) = text.split_once('/') {
        if denominator.contains('/') {
            return Err(RuntimeError::InvalidLiteral { text: text.to_string() });
        }
        let numerator = parse_value(numerator)?;
        let denominator = parse_value(denominator)?;

        if let (Value::SmallInt(n), Value::SmallInt(d)) = (&numerator, &denominator) {
            return Ok(Value::BigRational(small_rational(*n, *d)?).shrink());
        }

        let (Value::BigRational(n), Value::BigRational(d)) =
            (numerator.convert(Rank::BigRational)?, denominator.convert(Rank::BigRational)?)
        else {
            return Err(RuntimeError::InvalidLiteral { text: text.to_string() });
        };
        if d.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        return Ok(Value::BigRational(n / d).shrink());
    }

    if let Ok(n) = text.parse::<i64>() {
        return Ok(Value::SmallInt(n));
    }
    if let Some(n) = parse_big_integer(text) {
        return Ok(Value::BigInt(n).shrink());
    }
    if let Some(r) = parse_decimal(text) {
        return Ok(Value::BigRational(r).shrink());
    }

    Err(RuntimeError::InvalidLiteral { text: text.to_string() })
}

/// Builds a reduced rational from two native integers.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` if `denominator` is zero.
pub fn small_rational(numerator: i64, denominator: i64) -> EvalResult<BigRational> {
    if denominator == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(BigRational::new(BigInt::from(numerator), BigInt::from(denominator)))
}
