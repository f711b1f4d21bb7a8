//! Elementary geometry rules and the submissions graded against them.
//!
//! Every implementation is a [`RuleSet`]: a named table of plain function
//! pointers. Area and hypotenuse never call exponentiation directly; they
//! receive the [`PowerFn`] to route through, which is what lets the grader
//! substitute a submission's `power` for a single call.
//!
//! - **[`power`]**: the reference and naive exponentiation routines.
//! - **[`geometry`]**: domain-checked area and hypotenuse formulas.
//! - **[`registry`]**: the explicitly registered rule sets.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod geometry;
pub mod power;
pub mod registry;
pub mod rule_set;

pub use error::{DomainViolation, RuleError};
pub use rule_set::{AreaFn, HypotenuseFn, PowerFn, RuleSet};
