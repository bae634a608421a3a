//! Report query and selection
//!
//! Reports for a patient are listed one-based ("Report #1: CBC") while the
//! underlying selection is zero-based.

use crate::error::{LabReportError, Result};
use crate::models::report::ReportRecord;
use crate::store::ReportStore;

/// All reports stored for `phone`, oldest first
#[must_use]
pub fn reports_for<'a>(store: &'a ReportStore, phone: &str) -> &'a [ReportRecord] {
    store.reports_for(phone)
}

/// Select a report by zero-based index
pub fn select(reports: &[ReportRecord], index: usize) -> Result<&ReportRecord> {
    reports.get(index).ok_or(LabReportError::OutOfRange {
        index,
        len: reports.len(),
    })
}

/// Select a report by its one-based number as shown in labels
pub fn select_numbered(reports: &[ReportRecord], number: usize) -> Result<&ReportRecord> {
    match number.checked_sub(1) {
        Some(index) => select(reports, index),
        None => Err(LabReportError::OutOfRange {
            index: 0,
            len: reports.len(),
        }),
    }
}

/// Format the selection label for a report at zero-based `index`
#[must_use]
pub fn report_label(index: usize, record: &ReportRecord) -> String {
    format!("Report #{}: {}", index + 1, record.test_name())
}

/// Selection labels for every report, in order
#[must_use]
pub fn report_labels(reports: &[ReportRecord]) -> Vec<String> {
    reports
        .iter()
        .enumerate()
        .map(|(idx, record)| report_label(idx, record))
        .collect()
}

/// Recover the zero-based index from a label such as "Report #3: CBC"
#[must_use]
pub fn parse_label(label: &str) -> Option<usize> {
    let (_, rest) = label.split_once('#')?;
    let (digits, _) = rest.split_once(':')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_sub(1)
}
