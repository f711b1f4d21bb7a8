//! Grader for geometry rule submissions.
//!
//! Runs literal input suites against a submission and the reference
//! [`rules::RuleSet`], optionally substituting the submission's `power` with
//! the reference one for a single hypotenuse call.
//!
//! - **[`case`]**: suite files and the cases they expand to.
//! - **[`compare`]**: one comparison per graded function.
//! - **[`outcome`]**: per-case classification (pass, mismatch, error).
//! - **[`run`]**: the driver; covers the whole suite no matter what fails.
//! - **[`report`]**: summaries, text diagnostics, JSON output.
//!
//! [`cli`] wires these to the `grader` binary.

pub mod case;
pub mod cli;
pub mod compare;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod outcome;
pub mod report;
pub mod run;
