//! Suite execution.
//!
//! Runs every case of a suite against one submission. Failing cases are
//! recorded, never propagated: the run always covers the suite. The caller
//! prints diagnostics from the report; tracing only adds per-case detail.

use rules::RuleSet;
use tracing::{debug, info, instrument};

use crate::case::{Suite, format_input};
use crate::compare::Tolerance;
use crate::outcome::{CaseStatus, evaluate};
use crate::report::SuiteReport;

#[instrument(skip_all, fields(submission = submission.name(), reference = reference.name()))]
pub fn run_suite(
    submission: &RuleSet,
    reference: &RuleSet,
    suite: &Suite,
    tolerance: Tolerance,
) -> SuiteReport {
    let cases = suite.cases();
    info!(cases = cases.len(), "suite run started");

    let mut outcomes = Vec::with_capacity(cases.len());
    for (index, case) in cases.iter().enumerate() {
        let outcome = evaluate(case, submission, reference, tolerance);
        let input = format_input(&outcome.input);
        match outcome.status {
            CaseStatus::Pass => {
                debug!(index, function = %outcome.function, %input, "case passed");
            }
            CaseStatus::Mismatch => info!(
                index,
                function = %outcome.function,
                %input,
                substitute_power = outcome.substitute_power,
                actual = ?outcome.actual,
                expected = ?outcome.expected,
                "case mismatched"
            ),
            CaseStatus::Error => info!(
                index,
                function = %outcome.function,
                %input,
                substitute_power = outcome.substitute_power,
                error = outcome.error.as_deref().unwrap_or_default(),
                "case raised"
            ),
        }
        outcomes.push(outcome);
    }

    let report = SuiteReport::new(submission.name(), reference.name(), outcomes);
    info!(
        passed = report.summary.passed,
        total = report.summary.total,
        "suite run complete"
    );
    report
}
