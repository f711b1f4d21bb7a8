//! Domain-checked geometry formulas.
//!
//! Each formula takes the [`PowerFn`] it must route exponentiation through.

use std::f64::consts::PI;

use crate::error::{RuleError, ensure};
use crate::rule_set::PowerFn;

/// Area of a circle: `π · power(radius, 2)`.
pub fn area_of_circle(radius: f64, power: PowerFn) -> Result<f64, RuleError> {
    ensure(
        radius > 0.0,
        "area_of_circle expects a radius > 0",
        "radius > 0",
        || format!("radius={radius}"),
    )?;
    Ok(PI * power(radius, 2.0)?)
}

/// Hypotenuse of a right triangle: `power(power(a, 2) + power(b, 2), 0.5)`.
pub fn hypotenuse_of_right_triangle(
    side1: f64,
    side2: f64,
    power: PowerFn,
) -> Result<f64, RuleError> {
    check_sides(side1, side2)?;
    power(power(side1, 2.0)? + power(side2, 2.0)?, 0.5)
}

/// Hypotenuse computed with `powf` inline, ignoring the injected `power`.
///
/// Numerically identical to the routed version, so a grader cannot tell
/// from outputs alone that substitution had no effect.
pub fn inlined_hypotenuse_of_right_triangle(
    side1: f64,
    side2: f64,
    _power: PowerFn,
) -> Result<f64, RuleError> {
    check_sides(side1, side2)?;
    Ok((side1.powf(2.0) + side2.powf(2.0)).powf(0.5))
}

fn check_sides(side1: f64, side2: f64) -> Result<(), RuleError> {
    ensure(
        side1 > 0.0 && side2 > 0.0,
        "hypotenuse_of_right_triangle expects two side lengths > 0",
        "side1 > 0 and side2 > 0",
        || format!("side1={side1}, side2={side2}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::{naive_power, power};
    use std::error::Error as _;

    #[test]
    fn unit_circle_area_is_pi() {
        let area = area_of_circle(1.0, power).expect("area");
        assert!((area - PI).abs() < 1e-12);
    }

    #[test]
    fn area_scales_with_square_of_radius() {
        let area = area_of_circle(10.5, power).expect("area");
        assert!((area - PI * 10.5 * 10.5).abs() < 1e-9);
    }

    #[test]
    fn non_positive_radius_is_invalid() {
        for radius in [0.0, -1.0, -0.5, f64::NAN] {
            let err = area_of_circle(radius, power).expect_err("invalid radius");
            assert!(err.is_invalid_argument(), "radius {radius}");
            assert!(err.source().is_some());
        }
    }

    #[test]
    fn three_four_five() {
        assert_eq!(hypotenuse_of_right_triangle(3.0, 4.0, power).expect("hyp"), 5.0);
        assert_eq!(
            inlined_hypotenuse_of_right_triangle(3.0, 4.0, power).expect("hyp"),
            5.0
        );
    }

    #[test]
    fn non_positive_sides_are_invalid() {
        for (side1, side2) in [(0.0, 4.0), (3.0, 0.0), (-3.0, 4.0), (3.0, -4.0)] {
            let err = hypotenuse_of_right_triangle(side1, side2, power).expect_err("invalid");
            assert!(err.is_invalid_argument());
            let err = inlined_hypotenuse_of_right_triangle(side1, side2, power)
                .expect_err("invalid");
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn routed_hypotenuse_surfaces_power_failures() {
        let err = hypotenuse_of_right_triangle(3.0, 4.0, naive_power).expect_err("naive");
        assert_eq!(err, RuleError::NonIntegralExponent { exponent: 0.5 });
    }

    #[test]
    fn inlined_hypotenuse_ignores_injected_power() {
        let hyp = inlined_hypotenuse_of_right_triangle(3.0, 4.0, naive_power).expect("hyp");
        assert_eq!(hyp, 5.0);
    }

    #[test]
    fn domain_check_runs_before_power() {
        let err = hypotenuse_of_right_triangle(0.0, 4.0, naive_power).expect_err("invalid");
        assert!(err.is_invalid_argument());
    }
}
