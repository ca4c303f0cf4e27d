//! Report generation errors.

use super::error_code::{self, RubricErrorCode};

/// Errors that can occur while generating a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format: {format}")]
    UnknownFormat { format: String },

    #[error("Report serialization failed: {0}")]
    Serialize(String),
}

impl RubricErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
