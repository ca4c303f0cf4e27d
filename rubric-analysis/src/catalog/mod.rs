//! Requirement catalog: the rubric data model.

pub mod defaults;
pub mod interchange;

use serde::{Deserialize, Serialize};

use rubric_core::config::DEFAULT_MIN_CUSTOM_CLASSES;

use crate::classifier::FileType;
use crate::heuristics::{
    has_color, has_custom_classes, has_doctype, has_element, has_font_family, has_font_size,
    has_font_style, has_images_with_alt, has_layout, FontStyleKind, LayoutKind,
};

pub use interchange::{CatalogExporter, CatalogLoader};

/// A closed set of predicate kinds parameterized by their arguments.
///
/// Every check a requirement can make is one of these variants, so a
/// catalog loaded from JSON is data through and through: nothing in it is
/// executable beyond the engine's own heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateSpec {
    /// Case-insensitive substring test.
    Contains { token: String },
    /// User-supplied regex, validated at catalog load.
    Matches { pattern: String },
    /// Color usage in any recognized form.
    Color { token: String },
    /// Font family declared, linked, or imported.
    FontFamily { token: String },
    /// Font size declared.
    FontSize { token: String },
    /// Bold, italic, or underline via tag or declaration.
    FontStyle { style: FontStyleKind },
    /// Layout technique via declaration, class, or element.
    Layout { layout: LayoutKind },
    /// At least `min_count` distinct class tokens.
    CustomClasses {
        #[serde(default = "default_min_classes")]
        min_count: usize,
    },
    /// At least one image with non-empty alt text.
    ImagesWithAlt,
    /// Presence of an element with the given tag name.
    Element { tag: String },
    /// HTML5 DOCTYPE declaration.
    Doctype,
    /// Always false. Substituted for checks that failed to load.
    Never,
}

fn default_min_classes() -> usize {
    DEFAULT_MIN_CUSTOM_CLASSES
}

impl PredicateSpec {
    /// Run the predicate against raw file content.
    pub fn evaluate(&self, content: &str) -> bool {
        match self {
            PredicateSpec::Contains { token } => {
                content.to_lowercase().contains(&token.to_lowercase())
            }
            PredicateSpec::Matches { pattern } => regex::Regex::new(pattern)
                .map(|re| re.is_match(content))
                .unwrap_or(false),
            PredicateSpec::Color { token } => has_color(content, token),
            PredicateSpec::FontFamily { token } => has_font_family(content, token),
            PredicateSpec::FontSize { token } => has_font_size(content, token),
            PredicateSpec::FontStyle { style } => has_font_style(content, *style),
            PredicateSpec::Layout { layout } => has_layout(content, *layout),
            PredicateSpec::CustomClasses { min_count } => has_custom_classes(content, *min_count),
            PredicateSpec::ImagesWithAlt => has_images_with_alt(content),
            PredicateSpec::Element { tag } => has_element(content, tag),
            PredicateSpec::Doctype => has_doctype(content),
            PredicateSpec::Never => false,
        }
    }

    /// Check that the spec can execute. Used at catalog load; a failing
    /// spec is replaced with `Never` there, not rejected.
    pub fn validate(&self) -> Result<(), String> {
        if let PredicateSpec::Matches { pattern } = self {
            regex::Regex::new(pattern).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// One scored, named, weighted check against file content.
///
/// Identity is `id`. Uniqueness within a catalog is assumed, not
/// enforced: duplicate ids double-count and are caller error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// File type this requirement applies to; `None` applies to both.
    #[serde(default, rename = "type")]
    pub category: Option<FileType>,
    pub points: u32,
    pub check: PredicateSpec,
}

/// Infer a category from id/name substrings for definitions that omit
/// one. Decided once at catalog load, never re-derived.
pub fn infer_category(id: &str, name: &str) -> FileType {
    let haystack = format!("{id} {name}").to_lowercase();
    if ["tag", "element", "html"].iter().any(|t| haystack.contains(t)) {
        FileType::Html
    } else if ["css", "style"].iter().any(|t| haystack.contains(t)) {
        FileType::Css
    } else {
        FileType::Html
    }
}

/// Ordered collection of requirement definitions. Insertion order is
/// preserved for display and irrelevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    requirements: Vec<RequirementDef>,
}

impl Catalog {
    pub fn new(requirements: Vec<RequirementDef>) -> Self {
        Self { requirements }
    }

    pub fn requirements(&self) -> &[RequirementDef] {
        &self.requirements
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Sum of all weights, applicable or not. Catalog UIs display this.
    pub fn total_points(&self) -> u32 {
        self.requirements.iter().map(|r| r.points).sum()
    }

    /// Definitions applicable to `file_type`: category unset or equal.
    /// With no file type, every definition applies.
    pub fn applicable(
        &self,
        file_type: Option<FileType>,
    ) -> impl Iterator<Item = &RequirementDef> {
        self.requirements.iter().filter(move |def| {
            match (def.category, file_type) {
                (None, _) | (_, None) => true,
                (Some(category), Some(ft)) => category == ft,
            }
        })
    }

    /// The built-in HTML-structural rubric.
    pub fn html_default() -> Self {
        defaults::html_default()
    }

    /// The built-in CSS-stylistic rubric.
    pub fn css_default() -> Self {
        defaults::css_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_html_before_css_tokens() {
        assert_eq!(infer_category("req1", "Root html element"), FileType::Html);
        assert_eq!(infer_category("x1", "Uses a custom tag"), FileType::Html);
        assert_eq!(infer_category("css2", "Flexbox layout"), FileType::Css);
        assert_eq!(infer_category("style3", "Headings"), FileType::Css);
        // Neither token set: html.
        assert_eq!(infer_category("x9", "Mystery check"), FileType::Html);
    }

    #[test]
    fn applicable_honors_category_and_file_type() {
        let catalog = Catalog::new(vec![
            RequirementDef {
                id: "a".into(),
                name: "a".into(),
                description: String::new(),
                category: Some(FileType::Html),
                points: 1,
                check: PredicateSpec::Doctype,
            },
            RequirementDef {
                id: "b".into(),
                name: "b".into(),
                description: String::new(),
                category: Some(FileType::Css),
                points: 1,
                check: PredicateSpec::Doctype,
            },
            RequirementDef {
                id: "c".into(),
                name: "c".into(),
                description: String::new(),
                category: None,
                points: 1,
                check: PredicateSpec::Doctype,
            },
        ]);

        let ids = |ft| {
            catalog
                .applicable(ft)
                .map(|d| d.id.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(Some(FileType::Html)), vec!["a", "c"]);
        assert_eq!(ids(Some(FileType::Css)), vec!["b", "c"]);
        assert_eq!(ids(None), vec!["a", "b", "c"]);
    }

    #[test]
    fn contains_and_matches_predicates() {
        assert!(PredicateSpec::Contains { token: "HeLLo".into() }.evaluate("say hello"));
        assert!(!PredicateSpec::Contains { token: "bye".into() }.evaluate("say hello"));
        assert!(PredicateSpec::Matches { pattern: "(?i)<h[1-6][\\s>]".into() }
            .evaluate("<H2>title</H2>"));
        assert!(!PredicateSpec::Never.evaluate("anything"));
    }
}
