//! Plain-text presentation of reports
//!
//! All functions build strings; printing is left to the caller.

use std::fmt::Write;

use rand::Rng;

use crate::catalog::Catalog;
use crate::models::report::ReportRecord;

/// Shown when a phone number has no reports
pub const NO_REPORTS_MESSAGE: &str = "No reports found for that number.";

const SEPARATOR_WIDTH: usize = 50;

/// Listing of every report for a patient, as shown after a search
#[must_use]
pub fn render_listing(reports: &[ReportRecord]) -> String {
    if reports.is_empty() {
        return format!("{NO_REPORTS_MESSAGE}\n");
    }

    let mut out = String::new();
    for (idx, report) in reports.iter().enumerate() {
        let _ = writeln!(out, "Report #{}", idx + 1);
        let _ = writeln!(out, "Name: {}", report.patient_name());
        for (parameter, value) in report.ordered_values() {
            let _ = writeln!(out, "  {parameter}: {value}");
        }
        if report.has_verdict() {
            let _ = writeln!(out, "Final Result: {}", report.result());
        }
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    }
    out
}

/// Receipt number printed on a report document
#[must_use]
pub fn receipt_number() -> u32 {
    rand::rng().random_range(100_000..=999_999)
}

/// Printable report document for a single record
///
/// `number` is the one-based report number for this phone.
#[must_use]
pub fn render_document(
    lab_name: &str,
    phone: &str,
    record: &ReportRecord,
    number: usize,
    receipt: u32,
) -> String {
    let mut rows: Vec<(&str, String)> = record
        .ordered_values()
        .into_iter()
        .map(|(parameter, value)| (parameter, value.to_string()))
        .collect();
    if record.has_verdict() {
        rows.push(("Observation", record.result().to_string()));
    }

    let name_width = rows
        .iter()
        .map(|(parameter, _)| parameter.chars().count())
        .chain(std::iter::once("Test".len()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .chain(std::iter::once("Result".len()))
        .max()
        .unwrap_or(0);
    let rule = format!("+-{}-+-{}-+", "-".repeat(name_width), "-".repeat(value_width));

    let mut out = String::new();
    let _ = writeln!(out, "{lab_name}");
    let _ = writeln!(out, "{}", "=".repeat(lab_name.chars().count()));
    let _ = writeln!(out, "Receipt Number: {receipt}");
    let _ = writeln!(out, "Time: {}", record.formatted_timestamp());
    let _ = writeln!(out);
    let _ = writeln!(out, "Report #{number}: {}", record.test_name());
    let _ = writeln!(out, "Patient Name: {}", record.patient_name());
    let _ = writeln!(out, "Phone Number: {phone}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "| {:<name_width$} | {:<value_width$} |", "Test", "Result");
    let _ = writeln!(out, "{rule}");
    for (parameter, value) in &rows {
        let _ = writeln!(out, "| {parameter:<name_width$} | {value:<value_width$} |");
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Every catalog test with its parameters
#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for kind in catalog.iter() {
        let _ = writeln!(out, "{}: {}", kind.name, kind.parameters.join(", "));
    }
    out
}
