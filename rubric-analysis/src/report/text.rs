//! Plain-text reporter: per-file blocks and a batch summary.

use rubric_core::errors::ReportError;

use super::Reporter;
use crate::grader::FileCheckRecord;

pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, records: &[FileCheckRecord]) -> Result<String, ReportError> {
        let mut output = String::new();

        for record in records {
            output.push_str(&format!("File: {}\n", record.file_name));
            let type_name = record.file_type.map(|ft| ft.name()).unwrap_or("unknown");
            output.push_str(&format!("Type: {type_name}\n"));

            if record.marker.present {
                output.push_str("Status: PASSED ✓\n");
                if let Some(ref value) = record.marker.value {
                    output.push_str(&format!("Marker: {value}\n"));
                }
            } else {
                output.push_str("Status: FAILED ✗\n");
                output.push_str("No marker comment found\n");
            }

            if let Some(ref eval) = record.evaluation {
                for outcome in &eval.per_requirement {
                    let symbol = if outcome.passed { "✓" } else { "✗" };
                    output.push_str(&format!("  {symbol} {}\n", outcome.requirement_id));
                }
                output.push_str(&format!(
                    "Score: {}/{} ({}%)\n",
                    eval.earned_points, eval.total_points, eval.percentage
                ));
            }

            output.push_str("------------------------\n");
        }

        let passed = records.iter().filter(|r| r.marker.present).count();
        let failed = records.len() - passed;
        output.push_str(&format!(
            "--- Summary: {} files checked: {passed} passed, {failed} failed ---\n",
            records.len()
        ));

        Ok(output)
    }
}
