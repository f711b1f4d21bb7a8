//! Suite reports: per-case outcomes plus a derived summary.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::case::format_input;
use crate::outcome::{CaseOutcome, CaseStatus};

/// Everything observed while grading one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuiteReport {
    pub submission: String,
    pub reference: String,
    pub outcomes: Vec<CaseOutcome>,
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub mismatched: usize,
    pub errored: usize,
    /// `(passed, total)` per graded function.
    pub by_function: BTreeMap<String, (usize, usize)>,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[CaseOutcome]) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            summary.total += 1;
            match outcome.status {
                CaseStatus::Pass => summary.passed += 1,
                CaseStatus::Mismatch => summary.mismatched += 1,
                CaseStatus::Error => summary.errored += 1,
            }
            let entry = summary
                .by_function
                .entry(outcome.function.as_str().to_string())
                .or_insert((0, 0));
            if outcome.passed() {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
        summary
    }
}

impl SuiteReport {
    pub fn new(submission: &str, reference: &str, outcomes: Vec<CaseOutcome>) -> Self {
        let summary = Summary::from_outcomes(&outcomes);
        Self {
            submission: submission.to_string(),
            reference: reference.to_string(),
            outcomes,
            summary,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.summary.passed == self.summary.total
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }
}

/// Diagnostic line for a case that did not pass.
pub fn diagnostic(outcome: &CaseOutcome) -> String {
    format!(
        "unexpected behaviour for '{}' with input: {}",
        outcome.function,
        format_input(&outcome.input)
    )
}

/// Text rendering: one diagnostic per failure, then `summary:` lines.
pub fn render_text(report: &SuiteReport) -> String {
    let mut lines: Vec<String> = report.failures().map(diagnostic).collect();
    let summary = &report.summary;
    lines.push(format!(
        "summary: submission={} reference={} cases={}",
        report.submission, report.reference, summary.total
    ));
    lines.push(format!(
        "summary: passed={} mismatched={} errored={}",
        summary.passed, summary.mismatched, summary.errored
    ));
    for (function, (passed, total)) in &summary.by_function {
        lines.push(format!("summary: function {function} {passed}/{total}"));
    }
    lines.join("\n")
}

pub fn render_json(reports: &[SuiteReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("serialize reports")
}

pub fn write_json(path: &Path, reports: &[SuiteReport]) -> Result<()> {
    let contents = render_json(reports)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
