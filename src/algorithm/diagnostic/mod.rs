//! Diagnostic evaluation of lab test parameters
//!
//! Maps a test name and the raw parameter strings entered for it to a
//! `Classification` using the fixed rule attached to the test's catalog entry.
//! `evaluate` reports typed failures; `classify` collapses them into
//! `Classification::Error`, which is the form stored on a report.

pub mod classification;
pub mod rules;

use crate::catalog::Catalog;
use crate::models::report::ParameterValues;
use classification::Classification;
use log::debug;
use rules::Rule;

/// Reasons a set of parameter values cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// Test name not present in the catalog
    #[error("Unknown test: {0}")]
    UnknownTest(String),

    /// Parameter supplied without a value
    #[error("No value entered for '{parameter}'")]
    MissingField { parameter: String },

    /// Value that is not a finite number
    #[error("Value '{value}' for '{parameter}' is not a number")]
    UnparsableNumber { parameter: String, value: String },
}

/// Evaluate the parameter values for a catalog test
///
/// The test name is matched after trimming surrounding whitespace. Parameters
/// read by a tiered rule that are absent from `values` count as zero. A
/// parameter that is present but blank is a `MissingField`.
pub fn evaluate(
    test_name: &str,
    values: &ParameterValues,
) -> Result<Classification, EvaluationError> {
    let test_name = test_name.trim();
    let kind = Catalog::global()
        .lookup(test_name)
        .ok_or_else(|| EvaluationError::UnknownTest(test_name.to_string()))?;

    let classification = evaluate_rule(&kind.rule, values)?;
    debug!("Evaluated {test_name} with {} values: {classification}", values.len());
    Ok(classification)
}

/// Evaluate and collapse any failure into `Classification::Error`
#[must_use]
pub fn classify(test_name: &str, values: &ParameterValues) -> Classification {
    evaluate(test_name, values).unwrap_or_else(|e| {
        debug!("Evaluation of {test_name} failed: {e}");
        Classification::Error
    })
}

/// Apply a single rule to a set of parameter values
pub fn evaluate_rule(
    rule: &Rule,
    values: &ParameterValues,
) -> Result<Classification, EvaluationError> {
    match rule {
        Rule::CompositeScore { threshold } => {
            let mut score = 0.0;
            for (parameter, raw) in values {
                score += parse_reading(parameter, raw)?;
            }
            if score > *threshold {
                Ok(Classification::Positive)
            } else {
                Ok(Classification::Negative)
            }
        }
        Rule::Tiered(tiered) => {
            let [first, second] = tiered.parameters;
            let readings = [
                reading_or_zero(values, first)?,
                reading_or_zero(values, second)?,
            ];
            Ok(tiered.classify(readings))
        }
        Rule::Placeholder => Ok(Classification::Positive),
        Rule::NoVerdict => Ok(Classification::NotApplicable),
    }
}

/// Parse a raw entered value as a finite number
pub fn parse_reading(parameter: &str, raw: &str) -> Result<f64, EvaluationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvaluationError::MissingField {
            parameter: parameter.to_string(),
        });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EvaluationError::UnparsableNumber {
            parameter: parameter.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn reading_or_zero(values: &ParameterValues, parameter: &str) -> Result<f64, EvaluationError> {
    values
        .get(parameter)
        .map_or(Ok(0.0), |raw| parse_reading(parameter, raw))
}
