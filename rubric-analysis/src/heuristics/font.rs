//! Font heuristics: family, size, and style.

use serde::{Deserialize, Serialize};

use super::any_match;

/// Style variants checked by [`has_font_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyleKind {
    Bold,
    Italic,
    Underline,
}

/// True when `token` is declared as a font family: a `font-family`
/// declaration (stylesheet or style attribute), a linked stylesheet href
/// naming the font, or a web-font import URL.
pub fn has_font_family(content: &str, token: &str) -> bool {
    let tok = regex::escape(&token.to_lowercase().replace(['\'', '"'], ""));
    let patterns = [
        // In CSS
        format!(r#"(?i)font-family:\s*['"]?{tok}"#),
        // In style attribute
        format!(r#"(?i)style="[^"]*font-family:\s*['"]?{tok}"#),
        // In CSS link
        format!(r#"(?i)href="[^"]*{tok}[^"]*\.css""#),
        // Web-font import
        format!(r#"(?i)googleapis\.com/css[^"'\s]*family={tok}"#),
    ];
    any_match(content, &patterns)
}

/// True when `token` is declared as a font size, in a stylesheet or a
/// style attribute.
pub fn has_font_size(content: &str, token: &str) -> bool {
    let tok: String = token.to_lowercase().split_whitespace().collect();
    let tok = regex::escape(&tok);
    let patterns = [
        format!(r"(?i)font-size:\s*{tok}\b"),
        format!(r#"(?i)style="[^"]*font-size:\s*{tok}"#),
    ];
    any_match(content, &patterns)
}

/// True when the corresponding legacy tag or CSS declaration is present,
/// inline or in a style attribute.
pub fn has_font_style(content: &str, style: FontStyleKind) -> bool {
    let patterns: &[&str] = match style {
        FontStyleKind::Bold => &[
            // HTML tags
            r"(?i)<b>[^<]+</b>",
            r"(?i)<strong>[^<]+</strong>",
            // CSS properties
            r"(?i)font-weight:\s*(bold|700|800|900)",
            r#"(?i)style="[^"]*font-weight:\s*(bold|700|800|900)[^"]*""#,
        ],
        FontStyleKind::Italic => &[
            r"(?i)<i>[^<]+</i>",
            r"(?i)<em>[^<]+</em>",
            r"(?i)font-style:\s*italic",
            r#"(?i)style="[^"]*font-style:\s*italic[^"]*""#,
        ],
        FontStyleKind::Underline => &[
            r"(?i)<u>[^<]+</u>",
            r"(?i)text-decoration:\s*underline",
            r#"(?i)style="[^"]*text-decoration:\s*underline[^"]*""#,
        ],
    };
    any_match(content, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_in_declaration_and_attribute() {
        assert!(has_font_family("body { font-family: Arial, sans-serif; }", "Arial"));
        assert!(has_font_family("body { font-family: 'Open Sans'; }", "'Open Sans'"));
        assert!(has_font_family("<p style=\"font-family: arial\">x</p>", "Arial"));
        assert!(!has_font_family("body { font-family: Georgia; }", "Arial"));
    }

    #[test]
    fn family_in_link_and_import() {
        assert!(has_font_family(
            "<link href=\"fonts/roboto-regular.css\" rel=\"stylesheet\">",
            "roboto"
        ));
        assert!(has_font_family(
            "<link href=\"https://fonts.googleapis.com/css2?family=Roboto\">",
            "Roboto"
        ));
    }

    #[test]
    fn size_in_declaration_and_attribute() {
        assert!(has_font_size("p { font-size: 16px; }", "16px"));
        assert!(has_font_size("<p style=\"font-size:16px\">x</p>", "16px"));
        assert!(!has_font_size("p { font-size: 14px; }", "16px"));
    }

    #[test]
    fn styles_via_tags_and_css() {
        assert!(has_font_style("<b>hi</b>", FontStyleKind::Bold));
        assert!(has_font_style("<strong>hi</strong>", FontStyleKind::Bold));
        assert!(has_font_style("h1 { font-weight: 700; }", FontStyleKind::Bold));
        assert!(has_font_style("<em>hi</em>", FontStyleKind::Italic));
        assert!(has_font_style("p { font-style: italic; }", FontStyleKind::Italic));
        assert!(has_font_style("<u>hi</u>", FontStyleKind::Underline));
        assert!(has_font_style(
            "a { text-decoration: underline; }",
            FontStyleKind::Underline
        ));
        assert!(!has_font_style("<p>plain</p>", FontStyleKind::Bold));
    }
}
