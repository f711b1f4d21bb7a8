//! Suite file parsing and validation.
//!
//! A suite lists literal inputs for each graded function. The builtin suite
//! is used unless a TOML file is given; see `grader/suites/` for examples.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Graded function names, as printed in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Function {
    Power,
    AreaOfCircle,
    HypotenuseOfRightTriangle,
}

impl Function {
    pub fn as_str(self) -> &'static str {
        match self {
            Function::Power => "power",
            Function::AreaOfCircle => "area_of_circle",
            Function::HypotenuseOfRightTriangle => "hypotenuse_of_right_triangle",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparison to run against a submission and the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Case {
    Power {
        base: f64,
        exponent: f64,
    },
    AreaOfCircle {
        radius: f64,
    },
    /// `substitute_power` swaps in the reference `power` for this call only.
    Hypotenuse {
        side1: f64,
        side2: f64,
        substitute_power: bool,
    },
}

impl Case {
    pub fn function(&self) -> Function {
        match self {
            Case::Power { .. } => Function::Power,
            Case::AreaOfCircle { .. } => Function::AreaOfCircle,
            Case::Hypotenuse { .. } => Function::HypotenuseOfRightTriangle,
        }
    }

    pub fn input(&self) -> Vec<f64> {
        match *self {
            Case::Power { base, exponent } => vec![base, exponent],
            Case::AreaOfCircle { radius } => vec![radius],
            Case::Hypotenuse { side1, side2, .. } => vec![side1, side2],
        }
    }

    pub fn substitute_power(&self) -> bool {
        matches!(
            self,
            Case::Hypotenuse {
                substitute_power: true,
                ..
            }
        )
    }
}

/// Render an input tuple the way diagnostics print it, e.g. `(4.5, 2)`.
pub fn format_input(input: &[f64]) -> String {
    let parts: Vec<String> = input.iter().map(f64::to_string).collect();
    format!("({})", parts.join(", "))
}

/// A parsed suite: literal inputs per graded function.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Suite {
    #[serde(default)]
    pub power: Vec<PowerEntry>,
    #[serde(default)]
    pub area_of_circle: Vec<AreaEntry>,
    #[serde(default)]
    pub hypotenuse: Vec<HypotenuseEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PowerEntry {
    pub base: f64,
    pub exponent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AreaEntry {
    pub radius: f64,
}

/// Hypotenuse inputs. Without `substitute_power` the entry runs twice:
/// substituted first, then unsubstituted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HypotenuseEntry {
    pub side1: f64,
    pub side2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_power: Option<bool>,
}

impl HypotenuseEntry {
    fn modes(&self) -> Vec<bool> {
        match self.substitute_power {
            Some(mode) => vec![mode],
            None => vec![true, false],
        }
    }
}

impl Suite {
    /// The fixed literal suite graded when no suite file is given.
    pub fn builtin() -> Self {
        let power = [(1.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0), (4.5, 2.0)]
            .into_iter()
            .map(|(base, exponent)| PowerEntry { base, exponent })
            .collect();
        let area_of_circle = [1.0, 2.0, 9.0, 11.0, 10.5]
            .into_iter()
            .map(|radius| AreaEntry { radius })
            .collect();
        let hypotenuse = [
            (1.0, 1.0),
            (2.0, 2.0),
            (2.0, 1.0),
            (1.0, 2.0),
            (4.0, 5.0),
            (23.2, 0.2),
        ]
        .into_iter()
        .map(|(side1, side2)| HypotenuseEntry {
            side1,
            side2,
            substitute_power: None,
        })
        .collect();
        Self {
            power,
            area_of_circle,
            hypotenuse,
        }
    }

    /// Load and validate a suite file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read suite {}", path.display()))?;
        let suite: Suite =
            toml::from_str(&contents).with_context(|| format!("parse suite {}", path.display()))?;
        suite
            .validate()
            .with_context(|| format!("validate suite {}", path.display()))?;
        Ok(suite)
    }

    /// Load `path` if given, otherwise the builtin suite.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    #[cfg(test)]
    pub fn parse_str(contents: &str) -> Result<Self> {
        let suite: Suite = toml::from_str(contents).context("parse suite")?;
        suite.validate()?;
        Ok(suite)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize suite toml")
    }

    /// Expand entries into cases: power, then area, then hypotenuse.
    pub fn cases(&self) -> Vec<Case> {
        let mut cases = Vec::new();
        cases.extend(self.power.iter().map(|entry| Case::Power {
            base: entry.base,
            exponent: entry.exponent,
        }));
        cases.extend(
            self.area_of_circle
                .iter()
                .map(|entry| Case::AreaOfCircle {
                    radius: entry.radius,
                }),
        );
        for entry in &self.hypotenuse {
            for substitute_power in entry.modes() {
                cases.push(Case::Hypotenuse {
                    side1: entry.side1,
                    side2: entry.side2,
                    substitute_power,
                });
            }
        }
        cases
    }

    fn validate(&self) -> Result<()> {
        if self.power.is_empty() && self.area_of_circle.is_empty() && self.hypotenuse.is_empty() {
            bail!("suite must contain at least one case");
        }
        for (index, entry) in self.power.iter().enumerate() {
            ensure_finite(&[entry.base, entry.exponent])
                .with_context(|| format!("power[{index}] invalid"))?;
        }
        for (index, entry) in self.area_of_circle.iter().enumerate() {
            ensure_finite(&[entry.radius])
                .with_context(|| format!("area_of_circle[{index}] invalid"))?;
        }
        for (index, entry) in self.hypotenuse.iter().enumerate() {
            ensure_finite(&[entry.side1, entry.side2])
                .with_context(|| format!("hypotenuse[{index}] invalid"))?;
        }
        Ok(())
    }
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if let Some(value) = values.iter().find(|value| !value.is_finite()) {
        bail!("inputs must be finite numbers, got {value}");
    }
    Ok(())
}
