//! Context key construction
//!
//! A context key is the text around a match with every number masked, so two
//! mentions of the same fact compare equal whatever value they state.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder substituted for every masked amount or numeral.
pub const PLACEHOLDER: &str = "#";

/// Characters taken before the match start.
pub const WINDOW_BEFORE: usize = 55;
/// Characters taken after the match end.
pub const WINDOW_AFTER: usize = 25;
/// Keys keep only their trailing characters.
pub const MAX_KEY_LEN: usize = 70;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Currency amounts and bare numerals, each with an optional magnitude.
static NUMBER_MASK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\$\s*)?[0-9][0-9,]*(?:\.[0-9]+)?(?:\s*(?:thousand|million|k|m)\b)?")
        .expect("valid number mask regex")
});

/// Step back to the nearest char boundary at or before `offset`.
fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Byte range spanning `WINDOW_BEFORE` chars before `start`, the match
/// `start..end`, and `WINDOW_AFTER` chars after `end`, clipped to `text`.
fn window_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start = floor_char_boundary(text, start);
    let end = floor_char_boundary(text, end).max(start);

    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(WINDOW_BEFORE)
        .last()
        .map_or(start, |(i, _)| i);
    let window_end = text[end..]
        .char_indices()
        .nth(WINDOW_AFTER)
        .map_or(text.len(), |(i, _)| end + i);

    (window_start, window_end)
}

/// Normalize a raw snippet into a key: collapse, mask, lowercase, strip, truncate.
pub fn normalize_snippet(snippet: &str) -> String {
    let collapsed = WHITESPACE_REGEX.replace_all(snippet, " ");
    let masked = NUMBER_MASK_REGEX.replace_all(&collapsed, PLACEHOLDER);
    let lowered = masked.to_lowercase();

    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '#' || *c == ' ')
        .collect();
    let key = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    // Only ASCII survives the strip, so byte slicing is safe.
    if key.len() > MAX_KEY_LEN {
        key[key.len() - MAX_KEY_LEN..].trim_start().to_string()
    } else {
        key
    }
}

/// Build the context key for the match at bytes `start..end` of `text`.
///
/// The match itself is masked along with the rest of the window, so the key
/// does not depend on how wide the stated value is.
pub fn build_context_key(text: &str, start: usize, end: usize) -> String {
    let (window_start, window_end) = window_bounds(text, start, end);
    normalize_snippet(&text[window_start..window_end])
}
