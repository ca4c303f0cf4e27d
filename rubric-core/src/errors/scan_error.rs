//! Batch file-read errors.

use super::error_code::{self, RubricErrorCode};

/// Per-file read failures. Surfaced to the caller alongside the batch
/// results; never fatal to the batch.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Unreadable file {path}: {message}")]
    Unreadable { path: String, message: String },
}

impl RubricErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
