//! File-type classification from filename extension, with content
//! sniffing as fallback.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported submission file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Html,
    Css,
}

impl FileType {
    /// Detect file type from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<FileType> {
        match ext?.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(FileType::Html),
            "css" => Some(FileType::Css),
            _ => None,
        }
    }

    /// Returns all file extensions associated with this file type.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileType::Html => &["html", "htm"],
            FileType::Css => &["css"],
        }
    }

    /// Returns the display name of the file type.
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Html => "html",
            FileType::Css => "css",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static HTML_SNIFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!doctype\b|<html[\s>].*</html\s*>").expect("fixed pattern")
});

static CSS_SNIFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[a-zA-Z.#*\[][^{}<>]*\{[^{}]*[a-zA-Z-]+\s*:[^{}]*;[^{}]*\}")
        .expect("fixed pattern")
});

/// Classify a submission by extension, then by content.
///
/// Extension always wins over sniffing so that HTML files containing
/// embedded `<style>` blocks are not misread as CSS. Extensionless HTML
/// fragments whose only signal is such a block still sniff as CSS; that
/// fallback is best effort. `None` means the caller decides whether to
/// skip the file.
pub fn classify(filename: &str, content: &str) -> Option<FileType> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str());
    if let Some(file_type) = FileType::from_extension(ext) {
        return Some(file_type);
    }
    if HTML_SNIFF.is_match(content) {
        return Some(FileType::Html);
    }
    if CSS_SNIFF.is_match(content) {
        return Some(FileType::Css);
    }
    None
}
