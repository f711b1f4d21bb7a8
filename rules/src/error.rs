//! Typed failures raised by geometry rules.

use thiserror::Error;

/// A domain predicate that did not hold for the given input.
///
/// Carried as the `source()` of [`RuleError::InvalidArgument`] so callers can
/// see both the user-facing message and the exact check that failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("assertion failed: {predicate} (got {observed})")]
pub struct DomainViolation {
    pub predicate: String,
    pub observed: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// Geometric input outside the valid domain (non-positive length).
    #[error("{message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: DomainViolation,
    },
    /// An exponent that cannot drive a repetition count.
    #[error("exponent {exponent} is not an integer")]
    NonIntegralExponent { exponent: f64 },
    /// An exponent too large to count repetitions up to.
    #[error("exponent {exponent} exceeds the repetition limit {limit}")]
    ExponentOutOfRange { exponent: f64, limit: u32 },
}

impl RuleError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RuleError::InvalidArgument { .. })
    }
}

/// Check `holds`, wrapping a failed predicate into [`RuleError::InvalidArgument`].
pub(crate) fn ensure(
    holds: bool,
    message: &str,
    predicate: &str,
    observed: impl FnOnce() -> String,
) -> Result<(), RuleError> {
    if holds {
        return Ok(());
    }
    Err(RuleError::InvalidArgument {
        message: message.to_string(),
        source: DomainViolation {
            predicate: predicate.to_string(),
            observed: observed(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_argument_chains_violation() {
        let err = ensure(false, "radius must be > 0", "radius > 0", || "0".to_string())
            .expect_err("violation");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "radius must be > 0");
        let source = err.source().expect("chained source");
        assert_eq!(source.to_string(), "assertion failed: radius > 0 (got 0)");
    }

    #[test]
    fn ensure_passes_when_predicate_holds() {
        assert!(ensure(true, "unused", "unused", String::new).is_ok());
    }
}
