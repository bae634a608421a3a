//! Catalog of lab test kinds
//!
//! The catalog is compiled in and read-only. Every test kind declares the
//! ordered list of parameters entered for it and the rule used to evaluate them.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::algorithm::diagnostic::rules::{self, COMPOSITE_SCORE_THRESHOLD, Rule};
use crate::error::{LabReportError, Result};

/// A named lab test with its required parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TestKind {
    /// Catalog key, e.g. "Diabetes Test"
    pub name: &'static str,
    /// Required parameter names in entry order
    pub parameters: &'static [&'static str],
    /// Rule applied by the diagnostic evaluator
    pub rule: Rule,
}

impl TestKind {
    const fn new(name: &'static str, parameters: &'static [&'static str], rule: Rule) -> Self {
        Self {
            name,
            parameters,
            rule,
        }
    }

    /// Check whether a parameter belongs to this test kind
    #[must_use]
    pub fn declares(&self, parameter: &str) -> bool {
        self.parameters.contains(&parameter)
    }

    /// Position of a parameter in the declared order
    #[must_use]
    pub fn parameter_index(&self, parameter: &str) -> Option<usize> {
        self.parameters.iter().position(|p| *p == parameter)
    }
}

const COMPOSITE: Rule = Rule::CompositeScore {
    threshold: COMPOSITE_SCORE_THRESHOLD,
};

/// All test kinds, in catalog order
pub static TEST_KINDS: &[TestKind] = &[
    TestKind::new("Dengue Test", &["NS1", "IgM", "IgG"], Rule::Placeholder),
    TestKind::new("Diabetes Test", &["Fasting Glucose", "HbA1c"], Rule::Tiered(rules::DIABETES)),
    TestKind::new("Blood Pressure Test", &["Systolic", "Diastolic"], Rule::Tiered(rules::BLOOD_PRESSURE)),
    TestKind::new("HIV Test", &["RMD", "MDD", "SSI"], COMPOSITE),
    TestKind::new("Thalassemia Test", &["Hemoglobin", "MCV", "MCH"], Rule::Placeholder),
    TestKind::new("Chikungunya Test", &["IgM", "IgG"], Rule::Placeholder),
    TestKind::new("Gonorrhea Test", &["NAAT", "Culture"], Rule::Placeholder),
    TestKind::new(
        "CBC",
        &["WBC", "RBC", "Hemoglobin", "Hematocrit", "MCV", "MCH", "MCHC", "Platelets"],
        Rule::NoVerdict,
    ),
    TestKind::new("Liver Function Test", &["ALT", "AST", "ALP", "Bilirubin", "Albumin"], Rule::NoVerdict),
    TestKind::new("Kidney Function Test", &["Creatinine", "BUN", "Uric Acid"], Rule::NoVerdict),
    TestKind::new("Lipid Profile", &["Total Cholesterol", "HDL", "LDL", "Triglycerides"], Rule::NoVerdict),
    TestKind::new("Thyroid Function Test", &["TSH", "T3", "T4"], Rule::NoVerdict),
    TestKind::new("Vitamin D Test", &["Vitamin D25"], Rule::NoVerdict),
    TestKind::new("Iron Panel", &["Iron", "TIBC", "Ferritin"], Rule::NoVerdict),
    TestKind::new("CRP", &["C-Reactive Protein"], Rule::NoVerdict),
    TestKind::new("ESR", &["Erythrocyte Sedimentation Rate"], Rule::NoVerdict),
    TestKind::new("Urinalysis", &["pH", "Protein", "Glucose", "Ketones", "RBC", "WBC"], Rule::NoVerdict),
    TestKind::new("Stool Test", &["Occult Blood", "Parasites", "Consistency", "Color"], Rule::NoVerdict),
    TestKind::new("Electrolyte Panel", &["Sodium", "Potassium", "Chloride", "Bicarbonate"], Rule::NoVerdict),
    TestKind::new("Prostate Specific Antigen", &["PSA"], Rule::NoVerdict),
    TestKind::new("Beta hCG", &["hCG Level"], Rule::NoVerdict),
    TestKind::new("Coagulation Profile", &["PT", "aPTT", "INR"], Rule::NoVerdict),
    TestKind::new("COVID-19 RT-PCR", &["Cycle Threshold"], Rule::NoVerdict),
    TestKind::new("HbA1c", &["HbA1c%"], Rule::NoVerdict),
    TestKind::new("Serum Calcium", &["Calcium Level"], Rule::NoVerdict),
    TestKind::new("Magnesium Test", &["Serum Magnesium"], Rule::NoVerdict),
    TestKind::new("Amylase", &["Amylase Level"], Rule::NoVerdict),
    TestKind::new("Lipase", &["Lipase Level"], Rule::NoVerdict),
    TestKind::new("Cortisol", &["Morning Cortisol"], Rule::NoVerdict),
    TestKind::new("Insulin", &["Fasting Insulin"], Rule::NoVerdict),
    TestKind::new("Troponin I", &["Troponin I Level"], Rule::NoVerdict),
    TestKind::new("D-Dimer", &["D-Dimer Level"], Rule::NoVerdict),
    TestKind::new("Hepatitis B", &["HBsAg", "Anti-HBs", "HBV DNA"], Rule::NoVerdict),
    TestKind::new("Hepatitis C", &["Anti-HCV", "HCV RNA"], Rule::NoVerdict),
];

static GLOBAL: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(TEST_KINDS));

/// Read-only lookup over a table of test kinds
#[derive(Debug)]
pub struct Catalog {
    kinds: &'static [TestKind],
    by_name: HashMap<&'static str, usize>,
}

impl Catalog {
    #[must_use]
    pub fn new(kinds: &'static [TestKind]) -> Self {
        let by_name = kinds
            .iter()
            .enumerate()
            .map(|(idx, kind)| (kind.name, idx))
            .collect();
        Self { kinds, by_name }
    }

    /// The process-wide catalog built from `TEST_KINDS`
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Exact, case-sensitive lookup by test name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TestKind> {
        self.by_name.get(name).map(|&idx| &self.kinds[idx])
    }

    /// Lookup that fails with `UnknownTest`
    pub fn require(&self, name: &str) -> Result<&TestKind> {
        self.lookup(name)
            .ok_or_else(|| LabReportError::UnknownTest(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestKind> {
        self.kinds.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(|kind| kind.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
