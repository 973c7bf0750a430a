//! Exact-substring span location
//!
//! Offsets are character offsets into the slice being scanned. Literals are
//! compared as plain text; characters that are special in pattern languages
//! carry no meaning here.

use super::stats::Span;

/// Find every non-overlapping occurrence of `literal` in `text`
///
/// The scan runs left to right and resumes after the end of each match, so
/// `"aa"` is found once in `"aaa"`. An empty literal, or one longer than the
/// text, yields no spans.
pub fn find_occurrences(text: &[char], literal: &[char]) -> Vec<Span> {
    find_occurrences_where(text, literal, |_| true)
}

/// Find occurrences of `literal` that `accept` allows
///
/// A rejected candidate does not consume its characters: the scan moves on
/// by one, so an accepted occurrence overlapping it can still be found.
pub fn find_occurrences_where(
    text: &[char],
    literal: &[char],
    mut accept: impl FnMut(Span) -> bool,
) -> Vec<Span> {
    let width = literal.len();
    if width == 0 || width > text.len() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos + width <= text.len() {
        let candidate = Span::new(pos, pos + width);
        if text[pos..pos + width] == *literal && accept(candidate) {
            spans.push(candidate);
            pos += width;
        } else {
            pos += 1;
        }
    }
    spans
}

/// Convenience wrapper over [`find_occurrences`] for string input
pub fn find_in_str(text: &str, literal: &str) -> Vec<Span> {
    let text: Vec<char> = text.chars().collect();
    let literal: Vec<char> = literal.chars().collect();
    find_occurrences(&text, &literal)
}
