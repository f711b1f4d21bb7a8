//! Submission-versus-reference comparisons.
//!
//! Each `test_*` function returns `Ok(true)` when the submission agrees with
//! the reference. A rule failure on either side is returned as `Err` so the
//! driver can report it and move on.

use rules::{RuleError, RuleSet};
use tracing::debug;

/// How two results must relate to count as equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
}

impl Tolerance {
    /// Equal values only (NaN never matches).
    pub const EXACT: Tolerance = Tolerance { abs: 0.0 };

    /// Equal values always match, infinities included; otherwise the
    /// difference must be within `abs`.
    pub fn matches(self, actual: f64, expected: f64) -> bool {
        if actual == expected {
            return true;
        }
        self.abs > 0.0 && (actual - expected).abs() <= self.abs
    }
}

/// A pair of computed values from one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observed {
    pub actual: f64,
    pub expected: f64,
}

pub fn test_power(
    submission: &RuleSet,
    reference: &RuleSet,
    base: f64,
    exponent: f64,
    tolerance: Tolerance,
) -> Result<bool, RuleError> {
    let observed = observe_power(submission, reference, base, exponent)?;
    Ok(tolerance.matches(observed.actual, observed.expected))
}

pub fn test_area_of_circle(
    submission: &RuleSet,
    reference: &RuleSet,
    radius: f64,
    tolerance: Tolerance,
) -> Result<bool, RuleError> {
    let observed = observe_area_of_circle(submission, reference, radius)?;
    Ok(tolerance.matches(observed.actual, observed.expected))
}

pub fn test_hypotenuse(
    submission: &RuleSet,
    reference: &RuleSet,
    side1: f64,
    side2: f64,
    substitute_power: bool,
    tolerance: Tolerance,
) -> Result<bool, RuleError> {
    let observed = observe_hypotenuse(submission, reference, side1, side2, substitute_power)?;
    Ok(tolerance.matches(observed.actual, observed.expected))
}

pub(crate) fn observe_power(
    submission: &RuleSet,
    reference: &RuleSet,
    base: f64,
    exponent: f64,
) -> Result<Observed, RuleError> {
    Ok(Observed {
        actual: submission.power(base, exponent)?,
        expected: reference.power(base, exponent)?,
    })
}

pub(crate) fn observe_area_of_circle(
    submission: &RuleSet,
    reference: &RuleSet,
    radius: f64,
) -> Result<Observed, RuleError> {
    Ok(Observed {
        actual: submission.area_of_circle(radius)?,
        expected: reference.area_of_circle(radius)?,
    })
}

/// Compare hypotenuses, optionally through the reference `power`.
///
/// The substituted rule set is a temporary scoped to the one call, so the
/// submission's own `power` is back in effect afterwards even on failure.
pub(crate) fn observe_hypotenuse(
    submission: &RuleSet,
    reference: &RuleSet,
    side1: f64,
    side2: f64,
    substitute_power: bool,
) -> Result<Observed, RuleError> {
    let actual = if substitute_power {
        submission
            .with_power(reference.power_fn())
            .hypotenuse_of_right_triangle(side1, side2)?
    } else {
        submission.hypotenuse_of_right_triangle(side1, side2)?
    };
    let expected = reference.hypotenuse_of_right_triangle(side1, side2)?;
    debug!(
        submission = submission.name(),
        substitute_power, actual, expected, "hypotenuse compared"
    );
    Ok(Observed { actual, expected })
}
