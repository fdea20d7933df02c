//! Balanced-delimiter span extraction.
//!
//! Two variants share one depth-counting loop over the classifier's mode
//! stream, so a delimiter inside a string, comment, or regex literal never
//! counts toward depth:
//!
//! - [`extract_armed`] starts *before* the opening delimiter and may not find
//!   one at all — "not found" (`None`) is distinct from a found-but-empty
//!   pair.
//! - [`extract_pre_armed`] requires the text to start exactly at the opening
//!   delimiter and never fails: malformed input degrades to a permissive
//!   empty result so callers can keep processing the rest of the file.

use crate::classify::Classifier;

/// Options shared by the balanced-delimiter extractors.
///
/// ```rust
/// use codescan::{ExtractOptions, extract_armed};
///
/// let interior = ExtractOptions {
///     keep_delimiters: false,
///     ..ExtractOptions::default()
/// };
/// assert_eq!(extract_armed("f(a, b)", '(', &interior), Some("a, b".into()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Closing delimiter. When `None`, inferred from the opener for the
    /// well-known pairs `[]`, `{}`, `()` (see [`closing_for`]).
    pub close: Option<char>,
    /// When `true` (the default), delimiters inside string literals never
    /// count toward depth. Disable when strings have already been stripped
    /// and every occurrence should count.
    pub ignore_strings: bool,
    /// Whether the returned span includes the delimiter pair itself
    /// (default) or only the interior.
    pub keep_delimiters: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            close: None,
            ignore_strings: true,
            keep_delimiters: true,
        }
    }
}

/// Closing partner of a well-known opening delimiter.
#[must_use]
pub fn closing_for(open: char) -> Option<char> {
    match open {
        '[' => Some(']'),
        '{' => Some('}'),
        '(' => Some(')'),
        _ => None,
    }
}

/// Armed extraction: scans for the first `open` delimiter in live code, then
/// collects until the matching close brings the depth back to zero.
///
/// Returns `None` when no opener occurs, when the span is unterminated at
/// end of text, or when no closing delimiter is known for `open`. A present
/// but empty pair yields `Some` — callers depend on that distinction.
#[must_use]
pub fn extract_armed(text: &str, open: char, options: &ExtractOptions) -> Option<String> {
    let close = options.close.or_else(|| closing_for(open))?;
    let mut depth = 0_u32;
    let mut armed = false;
    let mut span = String::new();
    for cc in Classifier::with_strings(text, options.ignore_strings) {
        if !armed {
            if cc.is_code() && cc.ch == open {
                armed = true;
                depth = 1;
                span.push(cc.ch);
            }
            continue;
        }
        span.push(cc.ch);
        if cc.is_code() {
            if cc.ch == open && open != close {
                depth += 1;
            } else if cc.ch == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(trim_pair(&span, options.keep_delimiters));
                }
            }
        }
    }
    None
}

/// Pre-armed extraction: `text` is known to start at the opening delimiter,
/// so the depth counter starts at one.
///
/// Never fails. Empty input yields an empty string; an unterminated span or
/// an opener with no known closing delimiter yields the permissive fallback:
/// the bare delimiter pair when `keep_delimiters` is set, the empty string
/// otherwise.
#[must_use]
pub fn extract_pre_armed(text: &str, options: &ExtractOptions) -> String {
    let Some(open) = text.chars().next() else {
        return String::new();
    };
    let Some(close) = options.close.or_else(|| closing_for(open)) else {
        return String::new();
    };

    let mut depth = 1_u32;
    let mut span = String::new();
    span.push(open);
    let mut classified = Classifier::with_strings(text, options.ignore_strings);
    // The opener is already accounted for in the starting depth.
    let _ = classified.next();
    for cc in classified {
        span.push(cc.ch);
        if cc.is_code() {
            if cc.ch == open && open != close {
                depth += 1;
            } else if cc.ch == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return trim_pair(&span, options.keep_delimiters);
                }
            }
        }
    }

    if options.keep_delimiters {
        let mut pair = String::new();
        pair.push(open);
        pair.push(close);
        pair
    } else {
        String::new()
    }
}

fn trim_pair(span: &str, keep: bool) -> String {
    if keep {
        return span.to_string();
    }
    let mut interior = span.chars();
    interior.next();
    interior.next_back();
    interior.as_str().to_string()
}
