//! Report store
//!
//! Maps a patient's phone number to the ordered history of their reports.
//! The JSON file is the authoritative copy: loading reads the whole document
//! and every append rewrites it. Writers are not coordinated; with two
//! processes appending at once the last write wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{CorruptStorePolicy, LabConfig};
use crate::error::util::{read_optional, write_string};
use crate::error::{LabReportError, Result};
use crate::models::report::ReportRecord;
use crate::utils::logging::{
    log_report_appended, log_store_access, log_store_loaded, log_store_missing,
    log_store_unreadable,
};

/// Whole store document: phone number to reports in append order
pub type StoreDocument = BTreeMap<String, Vec<ReportRecord>>;

/// Append-only, file-backed store of report records
#[derive(Debug)]
pub struct ReportStore {
    config: LabConfig,
    reports: StoreDocument,
}

impl ReportStore {
    /// Load the store described by `config`
    ///
    /// An absent file is an empty store. A file that cannot be parsed,
    /// including one that is not valid UTF-8, is handled according to
    /// `config.corrupt_store_policy`.
    pub fn load(config: LabConfig) -> Result<Self> {
        let reports = read_document(&config)?;
        Ok(Self { config, reports })
    }

    /// Load the store at `path` with default settings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(LabConfig::default().with_data_file(path))
    }

    /// Discard in-memory state and reload from disk
    pub fn refresh(&mut self) -> Result<()> {
        self.reports = read_document(&self.config)?;
        Ok(())
    }

    /// Append a record for `phone` and persist the whole store
    ///
    /// If the write fails the in-memory append is undone.
    pub fn append(&mut self, phone: &str, record: ReportRecord) -> Result<()> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(LabReportError::validation("phone number must not be empty"));
        }

        let start = Instant::now();
        let test_name = record.test_name().to_string();
        let result = record.result();
        let history = self.reports.entry(phone.to_string()).or_default();
        history.push(record);
        let history_len = history.len();

        if let Err(e) = self.persist() {
            self.undo_append(phone);
            return Err(e);
        }
        log_report_appended(phone, &test_name, result, history_len, start.elapsed());
        Ok(())
    }

    /// All reports for `phone`, oldest first; empty if none were appended
    #[must_use]
    pub fn reports_for(&self, phone: &str) -> &[ReportRecord] {
        self.reports
            .get(phone.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Phone numbers with at least one report, in sorted order
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    /// Number of distinct phone numbers
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Total number of reports across all phone numbers
    #[must_use]
    pub fn report_count(&self) -> usize {
        self.reports.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.data_file
    }

    #[must_use]
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    fn persist(&self) -> Result<()> {
        let path = &self.config.data_file;
        log_store_access("Writing", path);

        let content = if self.config.pretty_json {
            serde_json::to_string_pretty(&self.reports)?
        } else {
            serde_json::to_string(&self.reports)?
        };
        write_string(path, &content, "persisting the report store")
    }

    fn undo_append(&mut self, phone: &str) {
        if let Some(reports) = self.reports.get_mut(phone) {
            reports.pop();
            if reports.is_empty() {
                self.reports.remove(phone);
            }
        }
    }
}

fn read_document(config: &LabConfig) -> Result<StoreDocument> {
    let path = &config.data_file;
    log_store_access("Loading", path);
    let start = Instant::now();

    let Some(content) = read_optional(path, "loading the report store")? else {
        log_store_missing(path);
        return Ok(StoreDocument::new());
    };

    let document = match serde_json::from_slice::<StoreDocument>(&content) {
        Ok(document) => document,
        Err(source) => match config.corrupt_store_policy {
            CorruptStorePolicy::TreatAsEmpty => {
                log_store_unreadable(path, &source);
                return Ok(StoreDocument::new());
            }
            CorruptStorePolicy::Fail => {
                return Err(LabReportError::CorruptStore {
                    path: path.clone(),
                    source,
                });
            }
        },
    };

    // A key with no reports cannot be produced by append
    let document: StoreDocument = document
        .into_iter()
        .filter(|(_, reports)| !reports.is_empty())
        .collect();

    let count = document.values().map(Vec::len).sum();
    log_store_loaded(path, document.len(), count, start.elapsed());
    Ok(document)
}
