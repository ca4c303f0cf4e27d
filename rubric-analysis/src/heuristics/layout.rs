//! Layout technique heuristics.

use serde::{Deserialize, Serialize};

use super::any_match;

/// Layout techniques checked by [`has_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Flex,
    Grid,
    Table,
    Responsive,
}

/// True when the layout technique plausibly appears: a `display`
/// declaration (stylesheet or inline style) or a class name carrying the
/// technique's token. `Table` also matches the `<table>` element;
/// `Responsive` matches media queries, a viewport meta tag, or
/// container/responsive/mobile class names.
pub fn has_layout(content: &str, kind: LayoutKind) -> bool {
    let patterns: &[&str] = match kind {
        LayoutKind::Flex => &[
            r"(?i)display:\s*flex",
            r#"(?i)style="[^"]*display:\s*flex[^"]*""#,
            r#"(?i)class="[^"]*flex[^"]*""#,
        ],
        LayoutKind::Grid => &[
            r"(?i)display:\s*grid",
            r#"(?i)style="[^"]*display:\s*grid[^"]*""#,
            r#"(?i)class="[^"]*grid[^"]*""#,
        ],
        LayoutKind::Table => &[
            r"(?i)<table[^>]*>",
            r"(?i)display:\s*table",
            r#"(?i)style="[^"]*display:\s*table[^"]*""#,
        ],
        LayoutKind::Responsive => &[
            r"(?i)@media\s*\(",
            r#"(?i)meta\s+name="viewport""#,
            r#"(?i)class="[^"]*container[^"]*""#,
            r#"(?i)class="[^"]*responsive[^"]*""#,
            r#"(?i)class="[^"]*mobile[^"]*""#,
        ],
    };
    any_match(content, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flex_and_grid_declarations() {
        assert!(has_layout(".box{display:flex;}", LayoutKind::Flex));
        assert!(has_layout(".box { display: grid; }", LayoutKind::Grid));
        assert!(!has_layout(".box{display:flex;}", LayoutKind::Grid));
        assert!(!has_layout(".box { display: grid; }", LayoutKind::Flex));
    }

    #[test]
    fn class_names_count() {
        assert!(has_layout("<div class=\"flex-row\">x</div>", LayoutKind::Flex));
        assert!(has_layout("<div class=\"grid-2\">x</div>", LayoutKind::Grid));
    }

    #[test]
    fn table_element_counts() {
        assert!(has_layout("<table border=\"1\"><tr></tr></table>", LayoutKind::Table));
        assert!(has_layout(".t { display: table; }", LayoutKind::Table));
    }

    #[test]
    fn responsive_signals() {
        assert!(has_layout("@media (max-width: 600px) { }", LayoutKind::Responsive));
        assert!(has_layout(
            "<meta name=\"viewport\" content=\"width=device-width\">",
            LayoutKind::Responsive
        ));
        assert!(has_layout("<div class=\"container\">x</div>", LayoutKind::Responsive));
        assert!(!has_layout("<div class=\"wide\">x</div>", LayoutKind::Responsive));
    }
}
