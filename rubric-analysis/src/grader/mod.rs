//! Batch grading: the per-file pipeline and the multi-file entry point.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use rubric_core::config::RubricConfig;
use rubric_core::errors::ScanError;

use crate::catalog::Catalog;
use crate::classifier::{classify, FileType};
use crate::evaluator::{evaluate, EvaluationResult};
use crate::marker::{MarkerDetector, MarkerOutcome};

/// Everything known about one checked submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCheckRecord {
    pub file_name: String,
    pub content: String,
    pub file_type: Option<FileType>,
    pub marker: MarkerOutcome,
    /// Present only when the file classified and the marker was found.
    /// A missing marker means "not evaluated", never a zero score.
    pub evaluation: Option<EvaluationResult>,
}

/// A file that could not be read. The batch continues without it.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ScanError,
}

/// Result of a batch run: records in selection order plus per-file
/// failures.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub records: Vec<FileCheckRecord>,
    pub failures: Vec<FileFailure>,
}

/// Grading pipeline: classify, detect the marker, evaluate.
///
/// Holds the active catalog and detector; the caller owns both
/// lifecycles and the record list.
pub struct Grader {
    catalog: Catalog,
    detector: MarkerDetector,
}

impl Grader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            detector: MarkerDetector::default(),
        }
    }

    pub fn with_detector(catalog: Catalog, detector: MarkerDetector) -> Self {
        Self { catalog, detector }
    }

    /// Build a grader whose detector keyword comes from configuration.
    pub fn from_config(config: &RubricConfig, catalog: Catalog) -> Self {
        Self::with_detector(catalog, MarkerDetector::new(config.marker.effective_keyword()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the active catalog. Existing records keep their old scores
    /// until [`Grader::rescore`] runs.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Run the full pipeline on in-memory content.
    pub fn check_content(&self, file_name: &str, content: String) -> FileCheckRecord {
        let file_type = classify(file_name, &content);
        if file_type.is_none() {
            tracing::warn!(file = %file_name, "unclassifiable file type; skipping evaluation");
        }
        let marker = self.detector.detect(&content, file_type);
        let evaluation = match (marker.present, file_type) {
            (true, Some(ft)) => Some(evaluate(&content, &self.catalog, Some(ft))),
            _ => None,
        };
        FileCheckRecord {
            file_name: file_name.to_string(),
            content,
            file_type,
            marker,
            evaluation,
        }
    }

    /// Check a batch of files.
    ///
    /// Reads run in parallel, each independent of its siblings; records
    /// come back in the order the paths were given, not completion
    /// order. An unreadable file surfaces as a failure and the rest of
    /// the batch still completes.
    pub fn check_files(&self, paths: &[PathBuf]) -> BatchOutcome {
        let mut read: Vec<(usize, Result<FileCheckRecord, FileFailure>)> = paths
            .par_iter()
            .enumerate()
            .map(|(index, path)| {
                let result = match std::fs::read_to_string(path) {
                    Ok(content) => Ok(self.check_content(&file_name_of(path), content)),
                    Err(e) => Err(FileFailure {
                        path: path.clone(),
                        error: ScanError::Unreadable {
                            path: path.display().to_string(),
                            message: e.to_string(),
                        },
                    }),
                };
                (index, result)
            })
            .collect();
        read.sort_by_key(|(index, _)| *index);

        let mut outcome = BatchOutcome::default();
        for (_, result) in read {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(failure) => {
                    tracing::warn!(
                        path = %failure.path.display(),
                        error = %failure.error,
                        "skipping unreadable file"
                    );
                    outcome.failures.push(failure);
                }
            }
        }
        outcome
    }

    /// Re-score existing records in place after a catalog change.
    /// Marker-absent and unclassified records stay unevaluated.
    pub fn rescore(&self, records: &mut [FileCheckRecord]) {
        for record in records.iter_mut() {
            record.evaluation = match (record.marker.present, record.file_type) {
                (true, Some(ft)) => Some(evaluate(&record.content, &self.catalog, Some(ft))),
                _ => None,
            };
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
