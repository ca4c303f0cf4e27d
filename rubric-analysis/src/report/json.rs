//! JSON reporter for machine consumers.
//!
//! Emits a per-file summary; raw file content is not included.

use serde::Serialize;

use rubric_core::errors::ReportError;

use super::Reporter;
use crate::evaluator::EvaluationResult;
use crate::grader::FileCheckRecord;

#[derive(Serialize)]
struct FileSummary<'a> {
    file_name: &'a str,
    file_type: Option<&'static str>,
    marker_present: bool,
    marker_value: Option<&'a str>,
    evaluation: Option<&'a EvaluationResult>,
}

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, records: &[FileCheckRecord]) -> Result<String, ReportError> {
        let summaries: Vec<FileSummary<'_>> = records
            .iter()
            .map(|record| FileSummary {
                file_name: &record.file_name,
                file_type: record.file_type.map(|ft| ft.name()),
                marker_present: record.marker.present,
                marker_value: record.marker.value.as_deref(),
                evaluation: record.evaluation.as_ref(),
            })
            .collect();

        serde_json::to_string_pretty(&summaries).map_err(|e| ReportError::Serialize(e.to_string()))
    }
}
