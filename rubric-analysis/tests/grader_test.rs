//! End-to-end tests for the grading pipeline: scenarios, batching,
//! re-scoring, and reports.

use std::path::PathBuf;

use rubric_analysis::catalog::Catalog;
use rubric_analysis::classifier::FileType;
use rubric_analysis::grader::Grader;
use rubric_analysis::report::{available_formats, create_reporter};

const HTML_PROBE: &str = "<!-- MARKER: S99999 -->\n<!DOCTYPE html><html><head><title>T</title></head><body><h1>Hi</h1></body></html>";

fn passed_ids(record: &rubric_analysis::grader::FileCheckRecord) -> Vec<String> {
    record
        .evaluation
        .as_ref()
        .unwrap()
        .per_requirement
        .iter()
        .filter(|o| o.passed)
        .map(|o| o.requirement_id.clone())
        .collect()
}

#[test]
fn marker_after_doctype_is_not_evaluated() {
    let grader = Grader::new(Catalog::html_default());
    let content = "<!DOCTYPE html><!-- MARKER: S12345 --><html><head><title>T</title></head><body><h1>Hi</h1></body></html>";
    let record = grader.check_content("index.html", content.to_string());

    assert_eq!(record.file_type, Some(FileType::Html));
    assert!(!record.marker.present);
    // Absence of marker short-circuits to "not evaluated", not zero.
    assert!(record.evaluation.is_none());
}

#[test]
fn html_probe_scores_structure_and_headings() {
    let grader = Grader::new(Catalog::html_default());
    let record = grader.check_content("index.html", HTML_PROBE.to_string());

    assert!(record.marker.present);
    assert_eq!(record.marker.value.as_deref(), Some("S99999"));

    let eval = record.evaluation.as_ref().unwrap();
    assert_eq!(
        passed_ids(&record),
        vec!["req1", "req2", "req3", "req4", "req5", "style3"]
    );
    assert_eq!(eval.earned_points, 55);
    assert_eq!(eval.total_points, 65);
    assert_eq!(eval.percentage, 85);
}

#[test]
fn css_probe_scores_flex_but_not_grid() {
    let grader = Grader::new(Catalog::css_default());
    let record = grader.check_content(
        "style.css",
        "/* MARKER: S1 */\n.box{display:flex;}".to_string(),
    );

    assert_eq!(record.file_type, Some(FileType::Css));
    assert_eq!(record.marker.value.as_deref(), Some("S1"));
    assert_eq!(passed_ids(&record), vec!["css2"]);

    let eval = record.evaluation.as_ref().unwrap();
    assert_eq!(eval.earned_points, 10);
    assert_eq!(eval.total_points, 50);
    assert_eq!(eval.percentage, 20);
}

#[test]
fn unclassifiable_files_are_skipped_not_scored() {
    let grader = Grader::new(Catalog::html_default());
    let record = grader.check_content("notes.txt", "<!-- MARKER: A1 -->\nplain notes".to_string());

    assert_eq!(record.file_type, None);
    // The marker is still reported for display purposes.
    assert!(record.marker.present);
    assert!(record.evaluation.is_none());
}

#[test]
fn batch_preserves_selection_order_and_survives_unreadable_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let a = dir.path().join("a.html");
    let b = dir.path().join("b.css");
    std::fs::write(&a, HTML_PROBE).unwrap();
    std::fs::write(&b, "/* MARKER: S1 */\n.box{display:flex;}").unwrap();
    let missing = dir.path().join("missing.html");

    let grader = Grader::new(Catalog::html_default());
    let paths: Vec<PathBuf> = vec![a, missing.clone(), b];
    let outcome = grader.check_files(&paths);

    let names: Vec<&str> = outcome.records.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.html", "b.css"]);

    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].path, missing);
}

#[test]
fn rescore_follows_the_active_catalog() {
    let mut grader = Grader::new(Catalog::html_default());
    let mut records = vec![
        grader.check_content("index.html", HTML_PROBE.to_string()),
        grader.check_content("no-marker.html", "<!DOCTYPE html><html></html>".to_string()),
    ];
    assert_eq!(records[0].evaluation.as_ref().unwrap().total_points, 65);

    grader.set_catalog(Catalog::css_default());
    grader.rescore(&mut records);

    // The html file has no applicable css requirements left.
    let eval = records[0].evaluation.as_ref().unwrap();
    assert_eq!(eval.total_points, 0);
    assert_eq!(eval.percentage, 0);
    // Marker-absent records stay unevaluated.
    assert!(records[1].evaluation.is_none());
}

#[test]
fn text_report_lists_files_and_summary() {
    let grader = Grader::new(Catalog::html_default());
    let records = vec![
        grader.check_content("index.html", HTML_PROBE.to_string()),
        grader.check_content("late.html", "<html><!-- MARKER: Z9 --></html>".to_string()),
    ];

    let reporter = create_reporter("text").unwrap();
    let report = reporter.generate(&records).unwrap();

    assert!(report.contains("File: index.html"));
    assert!(report.contains("Marker: S99999"));
    assert!(report.contains("Score: 55/65 (85%)"));
    assert!(report.contains("No marker comment found"));
    assert!(report.contains("2 files checked: 1 passed, 1 failed"));
}

#[test]
fn json_report_is_machine_readable() {
    let grader = Grader::new(Catalog::css_default());
    let records = vec![grader.check_content(
        "style.css",
        "/* MARKER: S1 */\n.box{display:flex;}".to_string(),
    )];

    let reporter = create_reporter("json").unwrap();
    let report = reporter.generate(&records).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(parsed[0]["file_name"], "style.css");
    assert_eq!(parsed[0]["file_type"], "css");
    assert_eq!(parsed[0]["marker_value"], "S1");
    assert_eq!(parsed[0]["evaluation"]["percentage"], 20);
}

#[test]
fn unknown_report_format_is_rejected() {
    assert!(create_reporter("sarif").is_none());
    assert_eq!(available_formats(), &["text", "json"]);
}
