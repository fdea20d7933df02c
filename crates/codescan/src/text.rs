//! Char-indexed text utilities.

/// Copy of `text` with the half-open char range `start..end` replaced by
/// `substitute`.
///
/// Indices are char offsets, not bytes. Out-of-range indices clamp to the
/// text: a `start` past the end appends, an `end` before `start` replaces
/// nothing. Never panics.
#[must_use]
pub fn replace_range(text: &str, start: usize, end: usize, substitute: &str) -> String {
    let end = end.max(start);
    let mut out = String::with_capacity(text.len() + substitute.len());
    let mut inserted = false;
    for (idx, ch) in text.chars().enumerate() {
        if idx == start {
            out.push_str(substitute);
            inserted = true;
        }
        if idx < start || idx >= end {
            out.push(ch);
        }
    }
    if !inserted {
        out.push_str(substitute);
    }
    out
}

/// Char offset of the first occurrence of `needle` in `haystack`.
///
/// `None` when `needle` does not occur or either input is empty — absent is
/// distinct from present-at-zero.
#[must_use]
pub fn first_position(haystack: &str, needle: &str) -> Option<usize> {
    if haystack.is_empty() || needle.is_empty() {
        return None;
    }
    let byte = haystack.find(needle)?;
    Some(haystack[..byte].chars().count())
}
