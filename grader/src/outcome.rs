use std::error::Error as _;

use rules::{RuleError, RuleSet};
use serde::{Deserialize, Serialize};

use crate::case::{Case, Function};
use crate::compare::{
    Observed, Tolerance, observe_area_of_circle, observe_hypotenuse, observe_power,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pass,
    Mismatch,
    Error,
}

/// Recorded result of one case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseOutcome {
    pub function: Function,
    pub input: Vec<f64>,
    pub substitute_power: bool,
    /// Non-finite values are written as strings (`"inf"`, `"-inf"`, `"NaN"`).
    #[serde(with = "reported_value")]
    pub expected: Option<f64>,
    #[serde(with = "reported_value")]
    pub actual: Option<f64>,
    pub status: CaseStatus,
    /// Error chain when either side failed.
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status == CaseStatus::Pass
    }
}

/// Run `case` against both rule sets and record what happened.
pub fn evaluate(
    case: &Case,
    submission: &RuleSet,
    reference: &RuleSet,
    tolerance: Tolerance,
) -> CaseOutcome {
    let observed = match *case {
        Case::Power { base, exponent } => observe_power(submission, reference, base, exponent),
        Case::AreaOfCircle { radius } => observe_area_of_circle(submission, reference, radius),
        Case::Hypotenuse {
            side1,
            side2,
            substitute_power,
        } => observe_hypotenuse(submission, reference, side1, side2, substitute_power),
    };
    classify(case, observed, tolerance)
}

pub fn classify(
    case: &Case,
    observed: Result<Observed, RuleError>,
    tolerance: Tolerance,
) -> CaseOutcome {
    let mut outcome = CaseOutcome {
        function: case.function(),
        input: case.input(),
        substitute_power: case.substitute_power(),
        expected: None,
        actual: None,
        status: CaseStatus::Error,
        error: None,
    };
    match observed {
        Ok(observed) => {
            outcome.expected = Some(observed.expected);
            outcome.actual = Some(observed.actual);
            outcome.status = if tolerance.matches(observed.actual, observed.expected) {
                CaseStatus::Pass
            } else {
                CaseStatus::Mismatch
            };
        }
        Err(err) => {
            outcome.error = Some(error_chain(&err));
        }
    }
    outcome
}

/// JSON has no literal for infinities or NaN, so those go out as strings
/// and `null` keeps meaning "not computed".
mod reported_value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(value) if value.is_finite() => serializer.serialize_some(value),
            Some(value) => serializer.serialize_some(&value.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(value)) => Ok(Some(value)),
            Some(Repr::Text(text)) => text
                .parse::<f64>()
                .map(Some)
                .map_err(|err| D::Error::custom(format!("invalid value {text:?}: {err}"))),
        }
    }
}

fn error_chain(err: &RuleError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
