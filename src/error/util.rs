//! Utility functions for error handling
//!
//! File helpers that attach the path and the purpose of the access to any
//! IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LabReportError, Result};

/// Read a file's bytes, returning `None` if it does not exist
///
/// The content is not checked for encoding; decoding is left to the caller.
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<Option<Vec<u8>>>` - The file content, `None` when absent, or a detailed error
pub fn read_optional(path: &Path, purpose: &str) -> Result<Option<Vec<u8>>> {
    if path.exists() && !path.is_file() {
        return Err(LabReportError::io(
            format!("Expected a file for: {purpose}"),
            path,
            io::Error::other("path is not a file"),
        ));
    }

    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };

            Err(LabReportError::io(context, path, e))
        }
    }
}

/// Write a string to a file, replacing its previous content
///
/// Missing parent directories are created first.
pub fn write_string(path: &Path, content: &str, purpose: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LabReportError::io(format!("Failed to create directory for: {purpose}"), parent, e)
        })?;
    }

    fs::write(path, content).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to write file for: {purpose}"),
        };
        LabReportError::io(context, path, e)
    })
}
