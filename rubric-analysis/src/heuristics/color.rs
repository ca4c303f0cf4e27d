//! Color usage heuristic.

use super::any_match;

/// True when `token` plausibly appears as a color: hex form, `rgb()`/
/// `rgba()` arguments, a color-bearing declaration, or a class name.
///
/// The token is lowercased, stripped of whitespace, and escaped before it
/// is interpolated into any pattern.
pub fn has_color(content: &str, token: &str) -> bool {
    let tok: String = token.to_lowercase().split_whitespace().collect();
    let tok = regex::escape(&tok);
    let patterns = [
        // Hex colors
        format!(r"(?i)#{tok}\b"),
        format!(r"(?i)#{tok};"),
        // RGB and RGBA colors
        format!(r"(?i)rgb\({tok}\)"),
        format!(r"(?i)rgba\({tok}\)"),
        // Named color in a declaration
        format!(r"(?i)color:\s*{tok}\b"),
        format!(r"(?i)background-color:\s*{tok}\b"),
        format!(r"(?i)background:\s*{tok}\b"),
        // Named color in a class
        format!(r#"(?i)class="[^"]*\b{tok}\b[^"]*""#),
    ];
    any_match(content, &patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_hex_and_named_forms() {
        assert!(has_color("<p style=\"color: #FF0000;\">x</p>", "ff0000"));
        assert!(has_color(".a { color: red; }", "red"));
        assert!(has_color(".a { background-color: Red }", "red"));
        assert!(has_color(".a { background: red }", "red"));
        assert!(has_color("<div class=\"bg red wide\">x</div>", "red"));
    }

    #[test]
    fn matches_rgb_form_without_spaces() {
        assert!(has_color(".a { color: rgb(255,0,0); }", "255,0,0"));
        assert!(has_color(".a { color: rgba(0,0,0,0.5); }", "0, 0, 0, 0.5"));
    }

    #[test]
    fn rejects_absent_color() {
        assert!(!has_color(".a { color: blue; }", "red"));
        assert!(!has_color("plain text", "red"));
    }

    #[test]
    fn token_is_escaped() {
        // A token with regex metacharacters must not change the grammar.
        assert!(!has_color(".a { color: blue; }", "r(ed"));
    }
}
