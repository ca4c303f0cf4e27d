//! Catalog import/export errors.

use super::error_code::{self, RubricErrorCode};

/// Errors that can occur while importing or exporting a requirement
/// catalog. A malformed document rejects the whole import; malformed
/// individual checks are recovered inside the loader and never reach here.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed catalog JSON: {0}")]
    Parse(String),

    #[error("Catalog serialization failed: {0}")]
    Serialize(String),
}

impl RubricErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
