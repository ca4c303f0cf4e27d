//! Feature heuristics: independent boolean predicates over raw text.
//!
//! Each heuristic detects the likely presence of one stylistic or
//! structural feature with permissive regex matching. Nothing here parses
//! HTML or CSS grammar, and nothing is aware of the catalog layer: every
//! function is pure, case-insensitive, and free of shared state.

mod color;
mod font;
mod layout;
mod markup;

pub use color::has_color;
pub use font::{has_font_family, has_font_size, has_font_style, FontStyleKind};
pub use layout::{has_layout, LayoutKind};
pub use markup::{has_custom_classes, has_doctype, has_element, has_images_with_alt};

use regex::RegexSet;

/// Compile `patterns` into a set and test `content` in a single pass.
/// An uncompilable set matches nothing.
pub(crate) fn any_match<I, P>(content: &str, patterns: I) -> bool
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    RegexSet::new(patterns)
        .map(|set| set.is_match(content))
        .unwrap_or(false)
}
