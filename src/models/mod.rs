//! Domain models for lab reports

pub mod report;

pub use report::{ParameterValues, ReportRecord};
