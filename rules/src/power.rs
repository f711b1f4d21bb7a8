//! Exponentiation routines.

use crate::error::RuleError;

/// Largest exponent [`naive_power`] will count up to.
pub const MAX_REPETITIONS: u32 = u16::MAX as u32;

/// Reference exponentiation.
///
/// Standard `powf` semantics (negative and fractional exponents included),
/// except that a zero base yields `0` for every exponent, `0^0` included.
pub fn power(base: f64, exponent: f64) -> Result<f64, RuleError> {
    if base == 0.0 {
        return Ok(0.0);
    }
    Ok(base.powf(exponent))
}

/// Exponentiation that defers entirely to `powf`, zero base included.
pub fn builtin_power(base: f64, exponent: f64) -> Result<f64, RuleError> {
    Ok(base.powf(exponent))
}

/// Exponentiation by repeated multiplication, `exponent - 1` times.
///
/// Known-bad: only positive integer exponents come out right. An exponent of
/// zero or below leaves `base` unmultiplied, so `naive_power(5.0, 0.0)` is `5`.
/// Fractional exponents are rejected since they cannot count repetitions,
/// and exponents above [`MAX_REPETITIONS`] are rejected to keep the loop finite.
pub fn naive_power(base: f64, exponent: f64) -> Result<f64, RuleError> {
    if base == 0.0 {
        return Ok(base);
    }
    if !exponent.is_finite() || exponent.fract() != 0.0 {
        return Err(RuleError::NonIntegralExponent { exponent });
    }
    if exponent > f64::from(MAX_REPETITIONS) {
        return Err(RuleError::ExponentOutOfRange {
            exponent,
            limit: MAX_REPETITIONS,
        });
    }
    let mut result = base;
    for _ in 1..(exponent as i64) {
        result *= base;
    }
    Ok(result)
}
