//! Structural markup heuristics: classes, images, elements.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use super::any_match;

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class="([^"]*)""#).expect("fixed pattern"));

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("fixed pattern"));

static IMG_ALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)alt="[^"]+""#).expect("fixed pattern"));

static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype\s+html").expect("fixed pattern"));

/// True when the document declares at least `min_count` distinct class
/// tokens across all `class="..."` attributes. Distinct tokens, not
/// occurrences: `class="a b a"` plus `class="a"` counts 2.
pub fn has_custom_classes(content: &str, min_count: usize) -> bool {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for caps in CLASS_ATTR.captures_iter(content) {
        if let Some(list) = caps.get(1) {
            for token in list.as_str().split_whitespace() {
                seen.insert(token.to_lowercase());
            }
        }
        if seen.len() >= min_count {
            return true;
        }
    }
    seen.len() >= min_count
}

/// True when at least one `<img>` tag carries a non-empty `alt`
/// attribute.
pub fn has_images_with_alt(content: &str) -> bool {
    IMG_TAG
        .find_iter(content)
        .any(|tag| IMG_ALT.is_match(tag.as_str()))
}

/// True when an element with the given tag name opens anywhere in the
/// content, with or without attributes, self-closing allowed.
pub fn has_element(content: &str, tag: &str) -> bool {
    let tok = regex::escape(&tag.to_lowercase());
    any_match(content, [format!(r"(?i)<{tok}(\s[^>]*)?/?>")])
}

/// True when the content opens an HTML5 DOCTYPE declaration anywhere.
pub fn has_doctype(content: &str) -> bool {
    DOCTYPE.is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_classes_not_occurrences() {
        let content = r#"<div class="a b a"><span class="a"></span></div>"#;
        assert!(has_custom_classes(content, 2));
        assert!(!has_custom_classes(content, 3));
    }

    #[test]
    fn class_tokens_are_case_insensitive() {
        let content = r#"<div class="Box box BOX"></div>"#;
        assert!(!has_custom_classes(content, 2));
        assert!(has_custom_classes(content, 1));
    }

    #[test]
    fn no_classes_fails_any_positive_threshold() {
        assert!(!has_custom_classes("<div>x</div>", 1));
    }

    #[test]
    fn images_need_nonempty_alt() {
        assert!(has_images_with_alt(r#"<img src="a.png" alt="A cat">"#));
        assert!(!has_images_with_alt(r#"<img src="a.png" alt="">"#));
        assert!(!has_images_with_alt(r#"<img src="a.png">"#));
        assert!(!has_images_with_alt("no images here"));
    }

    #[test]
    fn elements_match_with_and_without_attributes() {
        assert!(has_element("<html lang=\"en\"><body></body></html>", "html"));
        assert!(has_element("<title>T</title>", "title"));
        assert!(has_element("<br/>", "br"));
        assert!(!has_element("<head></head>", "body"));
    }

    #[test]
    fn doctype_detection() {
        assert!(has_doctype("<!DOCTYPE html><html></html>"));
        assert!(has_doctype("<!doctype HTML>"));
        assert!(!has_doctype("<html></html>"));
    }
}
