//! Grader configuration (`grader.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rules::registry;
use serde::{Deserialize, Serialize};

use crate::compare::Tolerance;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "grader.toml";

/// Grader configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraderConfig {
    /// Registered rule set treated as ground truth.
    pub reference: String,

    /// Suite file to grade with instead of the builtin suite.
    pub suite: Option<PathBuf>,

    /// Absolute tolerance for comparisons; `0` means exact equality.
    pub abs_tolerance: f64,

    /// Exit non-zero when any case fails. `false` only reports.
    pub fail_on_mismatch: bool,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            reference: registry::REFERENCE.to_string(),
            suite: None,
            abs_tolerance: 0.0,
            fail_on_mismatch: true,
        }
    }
}

impl GraderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.abs_tolerance.is_finite() || self.abs_tolerance < 0.0 {
            return Err(anyhow!("abs_tolerance must be a finite number >= 0"));
        }
        if registry::find(&self.reference).is_none() {
            return Err(anyhow!(
                "reference {:?} is not registered (known: {})",
                self.reference,
                registry::names().join(", ")
            ));
        }
        if let Some(suite) = &self.suite
            && suite.as_os_str().is_empty()
        {
            return Err(anyhow!("suite must be a non-empty path"));
        }
        Ok(())
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            abs: self.abs_tolerance,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GraderConfig::default()`. A relative
/// `suite` path is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<GraderConfig> {
    if !path.exists() {
        let cfg = GraderConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: GraderConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    if let Some(suite) = &cfg.suite
        && suite.is_relative()
        && let Some(parent) = path.parent()
    {
        cfg.suite = Some(parent.join(suite));
    }
    Ok(cfg)
}
