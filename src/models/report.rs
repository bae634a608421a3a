//! Report record model
//!
//! A `ReportRecord` is one completed lab test for a patient. The classification
//! is computed once when the record is created and stored with it; records are
//! never modified afterwards.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::algorithm::diagnostic::{classify, evaluate};
use crate::algorithm::diagnostic::classification::Classification;
use crate::catalog::{Catalog, TestKind};
use crate::error::{LabReportError, Result};

/// Raw parameter values as entered, keyed by parameter name
pub type ParameterValues = BTreeMap<String, String>;

/// Timestamp format used in the store file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One immutable, timestamped lab test result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "name")]
    patient_name: String,
    #[serde(rename = "test")]
    test_name: String,
    values: ParameterValues,
    result: Classification,
    #[serde(with = "timestamp_format")]
    timestamp: NaiveDateTime,
}

impl ReportRecord {
    /// Create a record stamped with the current local time
    pub fn create(
        patient_name: impl Into<String>,
        test_name: &str,
        values: ParameterValues,
    ) -> Result<Self> {
        Self::create_at(patient_name, test_name, values, now())
    }

    /// Create a record with an explicit timestamp
    ///
    /// The test must be in the catalog and every supplied parameter must be
    /// declared by it. Names and values are trimmed. Values that cannot be
    /// evaluated are stored with an `Error` result.
    pub fn create_at(
        patient_name: impl Into<String>,
        test_name: &str,
        values: ParameterValues,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        let (kind, entered) = validate_values(test_name, values)?;
        let result = classify(kind.name, &entered);
        Ok(Self::assemble(patient_name, kind, entered, result, timestamp))
    }

    /// Like `create`, but values that cannot be evaluated are rejected
    /// with `LabReportError::Evaluation` instead of being stored
    pub fn create_checked(
        patient_name: impl Into<String>,
        test_name: &str,
        values: ParameterValues,
    ) -> Result<Self> {
        let (kind, entered) = validate_values(test_name, values)?;
        let result = evaluate(kind.name, &entered)?;
        Ok(Self::assemble(patient_name, kind, entered, result, now()))
    }

    fn assemble(
        patient_name: impl Into<String>,
        kind: &TestKind,
        values: ParameterValues,
        result: Classification,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            patient_name: patient_name.into().trim().to_string(),
            test_name: kind.name.to_string(),
            values,
            result,
            timestamp,
        }
    }

    #[must_use]
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    #[must_use]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    #[must_use]
    pub fn values(&self) -> &ParameterValues {
        &self.values
    }

    #[must_use]
    pub fn result(&self) -> Classification {
        self.result
    }

    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp in the stored `YYYY-MM-DD HH:MM:SS` form
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Whether the stored result is a verdict (anything but "-")
    #[must_use]
    pub fn has_verdict(&self) -> bool {
        self.result.has_verdict()
    }

    /// Parameter/value pairs in the test's declared parameter order
    ///
    /// Parameters unknown to the current catalog (possible for records loaded
    /// from disk) follow in name order.
    #[must_use]
    pub fn ordered_values(&self) -> Vec<(&str, &str)> {
        let kind = Catalog::global().lookup(&self.test_name);
        let mut pairs: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_by_key(|(parameter, _)| {
            kind.and_then(|k| k.parameter_index(parameter))
                .unwrap_or(usize::MAX)
        });
        pairs
    }
}

/// Current local time truncated to whole seconds
fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Resolve the test kind and check every parameter against it
fn validate_values(
    test_name: &str,
    values: ParameterValues,
) -> Result<(&'static TestKind, ParameterValues)> {
    let kind = Catalog::global().require(test_name.trim())?;

    let mut entered = ParameterValues::new();
    for (parameter, value) in values {
        let parameter = parameter.trim();
        if !kind.declares(parameter) {
            return Err(LabReportError::UndeclaredParameter {
                test: kind.name.to_string(),
                parameter: parameter.to_string(),
            });
        }
        if entered.insert(parameter.to_string(), value.trim().to_string()).is_some() {
            return Err(LabReportError::validation(format!(
                "'{parameter}' entered more than once for {}",
                kind.name
            )));
        }
    }
    Ok((kind, entered))
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp form
pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
