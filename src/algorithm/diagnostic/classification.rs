//! Classification outcomes for lab test evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating a test's parameters
///
/// The serialized form matches the strings written to the store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Positive,
    Negative,
    Midrange,
    /// No diagnostic verdict is produced for this test kind
    #[serde(rename = "-")]
    NotApplicable,
    /// The supplied values could not be evaluated
    Error,
}

impl Classification {
    /// Get the display string for this classification
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Midrange => "Midrange",
            Self::NotApplicable => "-",
            Self::Error => "Error",
        }
    }

    /// Severity rank for verdict tiers (Negative < Midrange < Positive)
    ///
    /// `NotApplicable` and `Error` are not tiers and have no rank.
    #[must_use]
    pub const fn severity_rank(self) -> Option<u8> {
        match self {
            Self::Negative => Some(0),
            Self::Midrange => Some(1),
            Self::Positive => Some(2),
            Self::NotApplicable | Self::Error => None,
        }
    }

    /// Whether this classification carries a verdict worth displaying
    #[must_use]
    pub const fn has_verdict(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
