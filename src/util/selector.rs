//! CSS selector construction for thumbnail lookup.
//!
//! Image URLs end up inside attribute selectors, so they must be serialized
//! the way `CSS.escape` does. Doing it here keeps the lookup testable
//! off the browser.

use std::fmt::Write as _;

/// Serialize `value` as a CSS identifier (`CSS.escape` semantics).
///
/// The output is also safe inside a double-quoted CSS string.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    let only_char = value.chars().count() == 1;
    let first = value.chars().next();

    for (i, c) in value.chars().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => escape_code_point(&mut out, c),
            '0'..='9' if i == 0 => escape_code_point(&mut out, c),
            '0'..='9' if i == 1 && first == Some('-') => {
                escape_code_point(&mut out, c);
            }
            '-' if i == 0 && only_char => out.push_str("\\-"),
            c if c as u32 >= 0x80
                || c == '-'
                || c == '_'
                || c.is_ascii_alphanumeric() =>
            {
                out.push(c);
            }
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

fn escape_code_point(out: &mut String, c: char) {
    // Writing into a String cannot fail.
    let _ = write!(out, "\\{:x} ", c as u32);
}

/// Selector matching grid thumbnails whose `src` attribute equals `src`.
///
/// `grid` scopes the lookup (e.g. `.gallery-grid`); an empty scope searches
/// the whole document.
#[must_use]
pub fn thumbnail_selector(grid: &str, src: &str) -> String {
    let grid = grid.trim();
    if grid.is_empty() {
        format!("img[src=\"{}\"]", escape(src))
    } else {
        format!("{grid} img[src=\"{}\"]", escape(src))
    }
}

/// Selector matching every element carrying `class`.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{}", escape(class))
}
