//! Evaluation rules and threshold tables
//!
//! Each catalog entry carries one `Rule`. The thresholds here are fixed;
//! they are not clinical reference ranges.

use super::classification::Classification;

/// Sum above which the composite score is positive
pub const COMPOSITE_SCORE_THRESHOLD: f64 = 100_000.0;

/// How a reading is compared against a tier threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Reading must be strictly greater than the threshold
    Exceeds,
    /// Reading must be greater than or equal to the threshold
    AtLeast,
}

impl Comparison {
    #[must_use]
    pub fn holds(self, reading: f64, threshold: f64) -> bool {
        match self {
            Self::Exceeds => reading > threshold,
            Self::AtLeast => reading >= threshold,
        }
    }
}

/// Two-parameter, two-tier threshold rule
///
/// A tier triggers when either parameter crosses its threshold for that tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TieredRule {
    /// The two parameters read by the rule
    pub parameters: [&'static str; 2],
    /// Thresholds for the Positive tier, one per parameter
    pub positive: [f64; 2],
    /// Thresholds for the Midrange tier, one per parameter
    pub midrange: [f64; 2],
    pub comparison: Comparison,
}

impl TieredRule {
    /// Classify a pair of readings ordered like `parameters`
    #[must_use]
    pub fn classify(&self, readings: [f64; 2]) -> Classification {
        if self.tier_triggers(readings, self.positive) {
            Classification::Positive
        } else if self.tier_triggers(readings, self.midrange) {
            Classification::Midrange
        } else {
            Classification::Negative
        }
    }

    fn tier_triggers(&self, readings: [f64; 2], thresholds: [f64; 2]) -> bool {
        readings
            .iter()
            .zip(thresholds.iter())
            .any(|(&reading, &threshold)| self.comparison.holds(reading, threshold))
    }
}

/// Diabetes screening: fasting glucose (mg/dL) and HbA1c (%)
pub const DIABETES: TieredRule = TieredRule {
    parameters: ["Fasting Glucose", "HbA1c"],
    positive: [126.0, 6.5],
    midrange: [100.0, 5.7],
    comparison: Comparison::Exceeds,
};

/// Blood pressure: systolic and diastolic (mmHg)
pub const BLOOD_PRESSURE: TieredRule = TieredRule {
    parameters: ["Systolic", "Diastolic"],
    positive: [140.0, 90.0],
    midrange: [120.0, 80.0],
    comparison: Comparison::AtLeast,
};

/// Evaluation rule attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Sum of every supplied value compared against a threshold
    CompositeScore { threshold: f64 },
    /// Two-parameter tiered thresholds
    Tiered(TieredRule),
    /// Stub: always Positive. No real diagnostic logic exists for these tests.
    Placeholder,
    /// No verdict is produced
    NoVerdict,
}
