//! A laboratory report store with threshold-based diagnostic evaluation.
//!
//! Reports are keyed by the patient's phone number and persisted as a single
//! JSON document that is rewritten on every append.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod render;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::diagnostic::classification::Classification;
pub use algorithm::diagnostic::{EvaluationError, classify, evaluate};
pub use catalog::{Catalog, TestKind};
pub use config::{CorruptStorePolicy, LabConfig};
pub use error::{LabReportError, Result};
pub use models::report::{ParameterValues, ReportRecord};
pub use query::{parse_label, report_labels, select, select_numbered};
pub use store::ReportStore;
