use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest number of bits a shift or power may produce. Anything bigger is an
/// error rather than an attempt to allocate it.
pub const MAX_RESULT_BITS: u64 = 1 << 24;

/// Largest power of ten a decimal literal may scale by, as in `1e10000`.
pub const MAX_DECIMAL_EXPONENT: u64 = 10_000;

/// Splits an optional leading sign off a literal.
///
/// Returns `true` for a negative literal along with the remaining text.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Parses an integer literal of any size.
///
/// Accepts an optional sign and the radix prefixes `0x`, `0o` and `0b` (either
/// case). Returns `None` if the text is not an integer literal.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use vecalc::util::num::parse_big_integer;
///
/// assert_eq!(parse_big_integer("-0x1f"), Some(BigInt::from(-31)));
/// assert_eq!(parse_big_integer("1.5"), None);
/// ```
#[must_use]
pub fn parse_big_integer(text: &str) -> Option<BigInt> {
    let (negative, body) = split_sign(text);
    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        Some("0o" | "0O") => (8, &body[2..]),
        Some("0b" | "0B") => (2, &body[2..]),
        _ => (10, body),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a decimal literal such as `1.25`, `.5` or `3e-2` into an exact
/// rational.
///
/// Returns `None` if the text is not a decimal literal, or if its scale
/// exceeds [`MAX_DECIMAL_EXPONENT`].
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use vecalc::util::num::parse_decimal;
///
/// let r = parse_decimal("1.25").unwrap();
/// assert_eq!(r, BigRational::new(BigInt::from(5), BigInt::from(4)));
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<BigRational> {
    let (negative, body) = split_sign(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], body[at + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = BigInt::parse_bytes(format!("{whole}{fraction}").as_bytes(), 10)?;
    let scale = exponent.checked_sub(i64::try_from(fraction.len()).ok()?)?;
    if scale.unsigned_abs() > MAX_DECIMAL_EXPONENT {
        return None;
    }
    let power = BigInt::from(10).pow(u32::try_from(scale.unsigned_abs()).ok()?);
    let value = if scale >= 0 {
        BigRational::from_integer(digits * power)
    } else {
        BigRational::new(digits, power)
    };

    Some(if negative { -value } else { value })
}

/// Converts a shift count to a native unsigned integer.
///
/// ## Errors
/// Returns `RuntimeError::IllegalShiftCount` if the count is negative or does
/// not fit a `usize`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use vecalc::{error::RuntimeError, util::num::shift_count};
///
/// assert_eq!(shift_count(&BigInt::from(3)).unwrap(), 3);
///
/// let err = shift_count(&BigInt::from(-1)).unwrap_err();
/// assert!(matches!(err, RuntimeError::IllegalShiftCount { .. }));
/// ```
pub fn shift_count(count: &BigInt) -> EvalResult<usize> {
    count.to_usize()
         .ok_or_else(|| RuntimeError::IllegalShiftCount { count: count.to_string() })
}

/// Converts an exponent to the `u32` the big-number power routines take.
///
/// ## Errors
/// Returns `RuntimeError::NegativeExponentUnsupported` for a negative exponent
/// and `RuntimeError::InvalidArgument` for one too large to compute.
pub fn exponent_to_u32(exponent: &BigInt) -> EvalResult<u32> {
    if exponent < &BigInt::zero() {
        return Err(RuntimeError::NegativeExponentUnsupported);
    }

    exponent.to_u32()
            .ok_or_else(|| RuntimeError::InvalidArgument { details: format!("exponent {exponent} is too large") })
}

/// Raises `base` to `exponent`, refusing results wider than
/// [`MAX_RESULT_BITS`].
///
/// Bases 0, 1 and -1 never grow, so any exponent is accepted for them.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` if the result would be too large.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use vecalc::util::num::checked_pow;
///
/// assert_eq!(checked_pow(&BigInt::from(3), 4).unwrap(), BigInt::from(81));
/// assert_eq!(checked_pow(&BigInt::from(-1), u32::MAX).unwrap(), BigInt::from(-1));
/// assert!(checked_pow(&BigInt::from(2), u32::MAX).is_err());
/// ```
pub fn checked_pow(base: &BigInt, exponent: u32) -> EvalResult<BigInt> {
    let bits = base.bits();
    if bits > 1 && bits.saturating_mul(u64::from(exponent)) > MAX_RESULT_BITS {
        return Err(RuntimeError::InvalidArgument { details: format!("power result exceeds {MAX_RESULT_BITS} bits") });
    }

    Ok(base.pow(exponent))
}

/// Safely converts a `usize` to an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidArgument` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use vecalc::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(7).unwrap(), 7);
/// assert!(usize_to_i64_checked(usize::MAX).is_err());
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::InvalidArgument { details: format!("{value} does not fit a native integer") })
}
