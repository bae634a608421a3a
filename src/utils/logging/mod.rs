//! Logging utilities for store operations

pub mod log;

pub use self::log::{
    log_report_appended, log_store_access, log_store_loaded, log_store_missing,
    log_store_unreadable,
};
