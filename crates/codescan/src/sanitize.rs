//! Comment removal and regex blanking.

use crate::{classify::Classifier, mode::LexMode};

/// Sanitized copy of `text`: comments dropped outright, every regex literal
/// replaced by a single space. String interiors are left untouched.
///
/// The result is safe for naive delimiter and quote scanning — no comment
/// markers or regex slashes survive a pass, so sanitizing is idempotent.
/// Offsets computed afterwards are valid relative to the sanitized text, not
/// the original.
#[must_use]
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, true)
}

/// [`sanitize`] with string protection switched by `ignore_strings`.
///
/// With `false`, quote characters receive no special treatment and comment
/// or regex spans inside what would have been string literals are removed as
/// well.
#[must_use]
pub fn sanitize_with(text: &str, ignore_strings: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_regex = false;
    for cc in Classifier::with_strings(text, ignore_strings) {
        match cc.mode {
            LexMode::LineComment | LexMode::BlockComment => in_regex = false,
            LexMode::Regex => {
                // One placeholder space per literal, not per character, so a
                // stray `/` is never reintroduced.
                if !in_regex {
                    out.push(' ');
                    in_regex = true;
                }
            }
            LexMode::Code | LexMode::Str(_) => {
                in_regex = false;
                out.push(cc.ch);
            }
        }
    }
    out
}
