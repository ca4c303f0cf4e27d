//! Ownership marker detection.
//!
//! A submission must open with a student-identifier comment in the file
//! type's comment syntax. Only a leading match counts; a marker anywhere
//! past the leading whitespace is ignored.

use regex::Regex;
use serde::{Deserialize, Serialize};

use rubric_core::config::DEFAULT_MARKER_KEYWORD;

use crate::classifier::FileType;

/// Outcome of a marker scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerOutcome {
    pub present: bool,
    pub value: Option<String>,
}

/// Detector holding the compiled leading-comment patterns for one keyword.
///
/// HTML form: `<!-- KEYWORD: VALUE -->`. CSS form: `/* KEYWORD: VALUE */`.
/// The colon is optional and whitespace is tolerated around keyword,
/// colon, and value; the value itself is a maximal alphanumeric run.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    keyword: String,
    html: Regex,
    css: Regex,
}

impl MarkerDetector {
    /// Build a detector for `keyword`. The keyword is escaped before
    /// interpolation, so any string is accepted; config validation keeps
    /// it alphanumeric in practice.
    pub fn new(keyword: &str) -> Self {
        let kw = regex::escape(keyword);
        let html = Regex::new(&format!(r"^\s*<!--\s*{kw}\s*:?\s*([A-Za-z0-9]+)\s*-->"))
            .expect("escaped keyword");
        let css = Regex::new(&format!(r"^\s*/\*\s*{kw}\s*:?\s*([A-Za-z0-9]+)\s*\*/"))
            .expect("escaped keyword");
        Self {
            keyword: keyword.to_string(),
            html,
            css,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Scan `content` for a leading marker comment.
    ///
    /// CSS submissions use the block-comment form; HTML and unclassified
    /// submissions use the HTML comment form. Pure: no match means
    /// `present: false`, never an error.
    pub fn detect(&self, content: &str, file_type: Option<FileType>) -> MarkerOutcome {
        let re = match file_type {
            Some(FileType::Css) => &self.css,
            _ => &self.html,
        };
        match re.captures(content) {
            Some(caps) => MarkerOutcome {
                present: true,
                value: caps.get(1).map(|m| m.as_str().trim().to_string()),
            },
            None => MarkerOutcome::default(),
        }
    }
}

impl Default for MarkerDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_KEYWORD)
    }
}
