//! Report store log lines
//!
//! Opening a store file is logged at debug level. Loads, appends and the
//! corrupt-file fallback are logged at info and warn.

use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use crate::algorithm::diagnostic::classification::Classification;

/// Log that the store file is about to be read or rewritten
pub fn log_store_access(action: &str, path: &Path) {
    log::debug!("{action} report store {}", path.display());
}

/// Log a completed load of the store document
///
/// # Arguments
/// * `path` - Store file that was read
/// * `phones` - Number of phone numbers with reports
/// * `reports` - Total number of reports across all phone numbers
/// * `elapsed` - Time spent reading and parsing
pub fn log_store_loaded(path: &Path, phones: usize, reports: usize, elapsed: Duration) {
    log::info!(
        "Loaded {reports} reports for {phones} phone numbers from {} in {elapsed:?}",
        path.display()
    );
}

/// Log that no store file exists yet
pub fn log_store_missing(path: &Path) {
    log::info!("No report store at {}, starting empty", path.display());
}

/// Log a report appended and persisted for a patient
pub fn log_report_appended(
    phone: &str,
    test_name: &str,
    result: Classification,
    history_len: usize,
    elapsed: Duration,
) {
    log::info!(
        "Saved {test_name} ({result}) for {phone}, report #{history_len} in {elapsed:?}"
    );
}

/// Log that an unparseable store file is being ignored
pub fn log_store_unreadable(path: &Path, reason: &dyn Display) {
    log::warn!(
        "Ignoring unreadable report store {} and starting empty: {reason}",
        path.display()
    );
}
