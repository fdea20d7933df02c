//! First-quoted-string extraction.

use crate::{escape::is_escaped, mode::QuoteKind};

/// First complete quoted string in `text`, for any of the three quote kinds.
///
/// The string opens at the first unescaped quote character and closes at the
/// next unescaped occurrence of the *same* quote; other quote kinds in
/// between are ordinary content, and escaped quotes (odd backslash run) do
/// not terminate early. With `keep_quotes` the delimiters are included.
///
/// Returns `None` when no complete pair exists — an unterminated string is
/// never returned as a truncated fragment, since callers re-parse the result
/// as a quoted value. Input is expected to be comment/regex-sanitized (see
/// [`crate::sanitize`]); a `/` here is just a character.
#[must_use]
pub fn pop_string(text: &str, keep_quotes: bool) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut open: Option<char> = None;
    let mut content = String::new();
    for (idx, &c) in chars.iter().enumerate() {
        match open {
            None => {
                if QuoteKind::from_char(c).is_some() && !is_escaped(&chars, idx) {
                    open = Some(c);
                }
            }
            Some(q) => {
                if c == q && !is_escaped(&chars, idx) {
                    return Some(if keep_quotes {
                        format!("{q}{content}{q}")
                    } else {
                        content
                    });
                }
                content.push(c);
            }
        }
    }
    None
}
