//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use rules::{RuleSet, registry};
use tracing::{debug, info};

use crate::case::Suite;
use crate::config::{DEFAULT_CONFIG_FILE, GraderConfig, load_config};
use crate::exit_codes;
use crate::report::{SuiteReport, render_json, render_text, write_json};
use crate::run::run_suite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Options for `grader run`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Submission names; empty means every registered non-reference set.
    pub submissions: Vec<String>,
    pub suite: Option<PathBuf>,
    pub format: Format,
    pub out: Option<PathBuf>,
}

/// Load the explicit config, or `grader.toml` from `cwd` when present.
pub fn resolve_config(cwd: &Path, explicit: Option<&Path>) -> Result<GraderConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config {} not found", path.display());
            }
            load_config(path)
        }
        None => load_config(&cwd.join(DEFAULT_CONFIG_FILE)),
    }
}

/// List every registered rule set.
pub fn list_rule_sets(cfg: &GraderConfig) -> Result<i32> {
    for rules in registry::all() {
        let marker = if rules.name() == cfg.reference {
            " (reference)"
        } else {
            ""
        };
        println!("{}{}: {}", rules.name(), marker, rules.summary());
    }
    Ok(exit_codes::OK)
}

/// Print the effective suite as TOML.
pub fn show_suite(cfg: &GraderConfig, suite: Option<&Path>) -> Result<i32> {
    let suite = Suite::resolve(suite.or(cfg.suite.as_deref()))?;
    print!("{}", suite.to_toml()?);
    Ok(exit_codes::OK)
}

/// Grade the selected submissions and report every divergence.
pub fn run_submissions(cfg: &GraderConfig, options: &RunOptions) -> Result<i32> {
    let reference = registry::find(&cfg.reference)
        .with_context(|| format!("reference {} not registered", cfg.reference))?;
    let submissions = select_submissions(&options.submissions, reference.name())?;
    let suite = Suite::resolve(options.suite.as_deref().or(cfg.suite.as_deref()))
        .context("load suite")?;
    debug!(
        submissions = submissions.len(),
        cases = suite.cases().len(),
        "suite loaded"
    );

    let reports: Vec<SuiteReport> = submissions
        .iter()
        .map(|submission| run_suite(submission, &reference, &suite, cfg.tolerance()))
        .collect();

    match options.format {
        Format::Text => {
            let rendered: Vec<String> = reports.iter().map(render_text).collect();
            println!("{}", rendered.join("\n\n"));
        }
        Format::Json => println!("{}", render_json(&reports)?),
    }
    if let Some(out) = &options.out {
        write_json(out, &reports).context("write report")?;
    }

    let failing = reports.iter().filter(|report| !report.all_passed()).count();
    info!(
        graded = reports.len(),
        failing,
        fail_on_mismatch = cfg.fail_on_mismatch,
        "grading finished"
    );
    if failing > 0 && cfg.fail_on_mismatch {
        return Ok(exit_codes::MISMATCH);
    }
    Ok(exit_codes::OK)
}

fn select_submissions(names: &[String], reference: &str) -> Result<Vec<RuleSet>> {
    if names.is_empty() {
        return Ok(registry::submissions(reference));
    }
    names
        .iter()
        .map(|name| {
            registry::find(name).with_context(|| {
                format!(
                    "unknown submission {name} (known: {})",
                    registry::names().join(", ")
                )
            })
        })
        .collect()
}
