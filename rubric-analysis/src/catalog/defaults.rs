//! Built-in default catalogs. Fixed data, not behavior.

use rubric_core::config::DEFAULT_MIN_CUSTOM_CLASSES;

use super::{Catalog, PredicateSpec, RequirementDef};
use crate::classifier::FileType;
use crate::heuristics::LayoutKind;

/// Default rubric for HTML submissions: document structure plus a few
/// stylistic checks.
pub fn html_default() -> Catalog {
    Catalog::new(vec![
        def(
            "req1",
            "DOCTYPE declaration",
            "Document starts with an HTML5 DOCTYPE",
            FileType::Html,
            10,
            PredicateSpec::Doctype,
        ),
        def(
            "req2",
            "Root html element",
            "Document has an <html> element",
            FileType::Html,
            10,
            PredicateSpec::Element { tag: "html".into() },
        ),
        def(
            "req3",
            "Head section",
            "Document has a <head> section",
            FileType::Html,
            10,
            PredicateSpec::Element { tag: "head".into() },
        ),
        def(
            "req4",
            "Page title",
            "Document has a <title> element",
            FileType::Html,
            10,
            PredicateSpec::Element { tag: "title".into() },
        ),
        def(
            "req5",
            "Body section",
            "Document has a <body> element",
            FileType::Html,
            10,
            PredicateSpec::Element { tag: "body".into() },
        ),
        def(
            "style1",
            "Custom classes",
            "Uses at least three distinct class names",
            FileType::Html,
            5,
            PredicateSpec::CustomClasses { min_count: DEFAULT_MIN_CUSTOM_CLASSES },
        ),
        def(
            "style2",
            "Accessible images",
            "Images carry non-empty alt text",
            FileType::Html,
            5,
            PredicateSpec::ImagesWithAlt,
        ),
        def(
            "style3",
            "Headings",
            "Uses heading elements",
            FileType::Html,
            5,
            PredicateSpec::Matches { pattern: r"(?i)<h[1-6][\s>]".into() },
        ),
    ])
}

/// Default rubric for CSS submissions.
pub fn css_default() -> Catalog {
    Catalog::new(vec![
        def(
            "css1",
            "Color styling",
            "Declares a color or background color",
            FileType::Css,
            10,
            PredicateSpec::Matches { pattern: r"(?i)(background-)?color\s*:".into() },
        ),
        def(
            "css2",
            "Flexbox layout",
            "Uses display: flex",
            FileType::Css,
            10,
            PredicateSpec::Layout { layout: LayoutKind::Flex },
        ),
        def(
            "css3",
            "Grid layout",
            "Uses display: grid",
            FileType::Css,
            10,
            PredicateSpec::Layout { layout: LayoutKind::Grid },
        ),
        def(
            "css4",
            "Responsive rules",
            "Has media queries or responsive hooks",
            FileType::Css,
            10,
            PredicateSpec::Layout { layout: LayoutKind::Responsive },
        ),
        def(
            "css5",
            "Font family",
            "Declares a font-family",
            FileType::Css,
            10,
            PredicateSpec::Matches { pattern: r"(?i)font-family\s*:".into() },
        ),
    ])
}

fn def(
    id: &str,
    name: &str,
    description: &str,
    category: FileType,
    points: u32,
    check: PredicateSpec,
) -> RequirementDef {
    RequirementDef {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category: Some(category),
        points,
        check,
    }
}
