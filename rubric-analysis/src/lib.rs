//! Rubric analysis engine: the scoring core of the grading helper.
//!
//! Per-file pipeline: classify the file type, look for the leading
//! ownership marker, then score the content against the applicable subset
//! of the active requirement catalog. Callers own file acquisition,
//! catalog lifecycle, and presentation of the results.

pub mod catalog;
pub mod classifier;
pub mod evaluator;
pub mod grader;
pub mod heuristics;
pub mod marker;
pub mod report;

pub use catalog::{Catalog, CatalogExporter, CatalogLoader, PredicateSpec, RequirementDef};
pub use classifier::{classify, FileType};
pub use evaluator::{evaluate, EvaluationResult, RequirementOutcome};
pub use grader::{BatchOutcome, FileCheckRecord, FileFailure, Grader};
pub use marker::{MarkerDetector, MarkerOutcome};
pub use report::{available_formats, create_reporter, Reporter};
