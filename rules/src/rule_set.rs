//! The capability table shared by the reference and every submission.

use std::fmt;

use crate::error::RuleError;

/// The replaceable exponentiation entry point.
pub type PowerFn = fn(f64, f64) -> Result<f64, RuleError>;
/// Area of a circle, given the `power` to route through.
pub type AreaFn = fn(f64, PowerFn) -> Result<f64, RuleError>;
/// Hypotenuse of a right triangle, given the `power` to route through.
pub type HypotenuseFn = fn(f64, f64, PowerFn) -> Result<f64, RuleError>;

/// A named implementation of the three geometry rules.
///
/// `area_of_circle` and `hypotenuse_of_right_triangle` always receive the
/// table's own `power`. Substituting it means building a new table with
/// [`RuleSet::with_power`]; the original is never modified.
#[derive(Clone, Copy)]
pub struct RuleSet {
    name: &'static str,
    summary: &'static str,
    power: PowerFn,
    area_of_circle: AreaFn,
    hypotenuse: HypotenuseFn,
}

impl RuleSet {
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        power: PowerFn,
        area_of_circle: AreaFn,
        hypotenuse: HypotenuseFn,
    ) -> Self {
        Self {
            name,
            summary,
            power,
            area_of_circle,
            hypotenuse,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// The `power` entry point area and hypotenuse route through.
    pub fn power_fn(&self) -> PowerFn {
        self.power
    }

    pub fn power(&self, base: f64, exponent: f64) -> Result<f64, RuleError> {
        (self.power)(base, exponent)
    }

    pub fn area_of_circle(&self, radius: f64) -> Result<f64, RuleError> {
        (self.area_of_circle)(radius, self.power)
    }

    pub fn hypotenuse_of_right_triangle(&self, side1: f64, side2: f64) -> Result<f64, RuleError> {
        (self.hypotenuse)(side1, side2, self.power)
    }

    /// Copy of this rule set with `power` replaced.
    pub fn with_power(&self, power: PowerFn) -> Self {
        Self { power, ..*self }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
