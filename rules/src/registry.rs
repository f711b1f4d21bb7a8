//! Explicitly registered rule sets.
//!
//! New submissions are added to [`all`]; nothing is discovered at runtime.

use crate::geometry::{
    area_of_circle, hypotenuse_of_right_triangle, inlined_hypotenuse_of_right_triangle,
};
use crate::power::{builtin_power, naive_power, power};
use crate::rule_set::RuleSet;

/// Name of the ground-truth rule set.
pub const REFERENCE: &str = "solution";

pub const SOLUTION: RuleSet = RuleSet::new(
    REFERENCE,
    "reference implementation",
    power,
    area_of_circle,
    hypotenuse_of_right_triangle,
);

pub const FAITHFUL: RuleSet = RuleSet::new(
    "faithful",
    "builtin exponentiation, every rule routed through power",
    builtin_power,
    area_of_circle,
    hypotenuse_of_right_triangle,
);

pub const NAIVE_POWER: RuleSet = RuleSet::new(
    "naive-power",
    "power by repeated multiplication (wrong for exponents below 1)",
    naive_power,
    area_of_circle,
    hypotenuse_of_right_triangle,
);

pub const INLINED_POWER: RuleSet = RuleSet::new(
    "inlined-power",
    "hypotenuse computed inline, bypassing power",
    builtin_power,
    area_of_circle,
    inlined_hypotenuse_of_right_triangle,
);

/// Every registered rule set, reference first.
pub fn all() -> Vec<RuleSet> {
    vec![SOLUTION, FAITHFUL, NAIVE_POWER, INLINED_POWER]
}

/// Registered rule sets other than `reference`.
pub fn submissions(reference: &str) -> Vec<RuleSet> {
    all()
        .into_iter()
        .filter(|rules| rules.name() != reference)
        .collect()
}

pub fn find(name: &str) -> Option<RuleSet> {
    all().into_iter().find(|rules| rules.name() == name)
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(RuleSet::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names = names();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn reference_is_registered_first() {
        assert_eq!(all()[0].name(), REFERENCE);
        assert!(find(REFERENCE).is_some());
    }

    #[test]
    fn submissions_exclude_reference() {
        let names: Vec<&str> = submissions(REFERENCE).iter().map(RuleSet::name).collect();
        assert_eq!(names, vec!["faithful", "naive-power", "inlined-power"]);
        let names: Vec<&str> = submissions("faithful").iter().map(RuleSet::name).collect();
        assert_eq!(names, vec!["solution", "naive-power", "inlined-power"]);
    }

    #[test]
    fn find_unknown_is_none() {
        assert!(find("student42").is_none());
    }

    #[test]
    fn every_registered_set_agrees_on_three_four_five() {
        for rules in all() {
            assert_eq!(
                rules
                    .with_power(SOLUTION.power_fn())
                    .hypotenuse_of_right_triangle(3.0, 4.0)
                    .expect("hyp"),
                5.0,
                "{}",
                rules.name()
            );
        }
    }
}
