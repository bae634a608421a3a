//! Configuration for the report store.

use std::path::PathBuf;

/// Environment variable overriding the store file location
pub const DATA_FILE_ENV: &str = "LAB_REPORTS_DATA_FILE";

/// Default store file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "reports_data.json";

/// Default heading printed on report documents
pub const DEFAULT_LAB_NAME: &str = "Patient Lab Report System";

/// What to do when the store file exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptStorePolicy {
    /// Log a warning and start from an empty store
    #[default]
    TreatAsEmpty,
    /// Refuse to load and report the parse error
    Fail,
}

/// Configuration for the `ReportStore`
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Location of the JSON store document
    pub data_file: PathBuf,
    /// Handling of a store file that is not well-formed
    pub corrupt_store_policy: CorruptStorePolicy,
    /// Write the store document indented rather than compact
    pub pretty_json: bool,
    /// Heading printed on report documents
    pub lab_name: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            corrupt_store_policy: CorruptStorePolicy::default(),
            pretty_json: true,
            lab_name: DEFAULT_LAB_NAME.to_string(),
        }
    }
}

impl LabConfig {
    /// Default configuration with the data file taken from `LAB_REPORTS_DATA_FILE` when set
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::default().with_data_file(path),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    #[must_use]
    pub fn with_lab_name(mut self, lab_name: impl Into<String>) -> Self {
        self.lab_name = lab_name.into();
        self
    }

    #[must_use]
    pub fn with_corrupt_store_policy(mut self, policy: CorruptStorePolicy) -> Self {
        self.corrupt_store_policy = policy;
        self
    }
}
