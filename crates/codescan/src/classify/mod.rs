//! Per-character lexical classification.
//!
//! The classifier is the one component with real state-machine complexity;
//! everything else in the crate (sanitizing, balanced extraction) is a thin
//! consumer of the mode stream it produces. It makes a single left-to-right
//! pass and never errors: any ambiguous construct falls back to
//! [`LexMode::Code`], which is the safe default because it can only cause a
//! span to be kept, never silently discarded.

use regex::Regex;

use crate::{
    escape::is_escaped,
    mode::{LexMode, QuoteKind},
};

/// One classified character of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedChar {
    /// Zero-based char index into the source.
    pub idx: usize,
    /// The character itself.
    pub ch: char,
    /// The lexical mode in effect at this index.
    pub mode: LexMode,
}

impl ClassifiedChar {
    /// Whether this index is live code.
    #[must_use]
    pub fn is_code(&self) -> bool {
        self.mode.is_code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Str(QuoteKind),
    LineComment,
    BlockComment { opened_at: usize },
    Regex { until: usize },
}

/// Single-pass lexical classifier over source text.
///
/// Iterating yields one [`ClassifiedChar`] per character, in order. The scan
/// state is call-local; dropping the iterator mid-way has no effect beyond
/// discarding the remainder.
///
/// ```rust
/// use codescan::{Classifier, LexMode};
///
/// let modes: Vec<LexMode> = Classifier::new("a'b'").map(|c| c.mode).collect();
/// assert_eq!(modes[0], LexMode::Code);
/// assert!(modes[1].is_string()); // the opening quote belongs to the string
/// ```
#[derive(Debug)]
pub struct Classifier {
    chars: Vec<char>,
    idx: usize,
    state: State,
    strings_enabled: bool,
}

impl Classifier {
    /// Classifier with string detection enabled (the default: delimiters and
    /// comment markers inside quotes are not acted on).
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_strings(text, true)
    }

    /// Classifier with string detection switched by `strings_enabled`.
    ///
    /// With `false`, quote characters are ordinary code and string interiors
    /// receive no protection. Useful when the caller has already stripped or
    /// placeholder-replaced string content.
    #[must_use]
    pub fn with_strings(text: &str, strings_enabled: bool) -> Self {
        Self {
            chars: text.chars().collect(),
            idx: 0,
            state: State::Code,
            strings_enabled,
        }
    }

    fn classify_code(&mut self, idx: usize, c: char) -> LexMode {
        if self.strings_enabled {
            if let Some(q) = QuoteKind::from_char(c) {
                if !is_escaped(&self.chars, idx) {
                    self.state = State::Str(q);
                    return LexMode::Str(q);
                }
                return LexMode::Code;
            }
        }

        if c == '/' && !is_escaped(&self.chars, idx) {
            let next = self.chars.get(idx + 1).copied();
            let prev = idx.checked_sub(1).map(|i| self.chars[i]);
            match next {
                // `https://…` must not start a comment, hence the `:` check.
                Some('/') if prev != Some(':') => {
                    self.state = State::LineComment;
                    return LexMode::LineComment;
                }
                Some('*') => {
                    self.state = State::BlockComment { opened_at: idx };
                    return LexMode::BlockComment;
                }
                _ => {
                    if let Some(end) = self.regex_end(idx) {
                        self.state = State::Regex { until: end + 1 };
                        return LexMode::Regex;
                    }
                }
            }
        }

        LexMode::Code
    }

    /// Forward scan for the closing slash of a regex literal starting at
    /// `idx`. Tracks `()`/`[]` nesting so a slash inside a character class or
    /// group does not close the literal, and aborts at a newline since regex
    /// literals are single-line. Returns the closing slash index only if the
    /// candidate text passes [`is_regex_candidate`].
    fn regex_end(&self, idx: usize) -> Option<usize> {
        let mut parens = 0_i32;
        let mut brackets = 0_i32;
        let mut j = idx + 1;
        while j < self.chars.len() {
            let c = self.chars[j];
            if c == '\n' {
                return None;
            }
            match c {
                '(' => parens += 1,
                ')' => parens -= 1,
                '[' => brackets += 1,
                ']' => brackets -= 1,
                '/' if parens < 1 && brackets < 1 && !is_escaped(&self.chars, j) => {
                    let candidate: String = self.chars[idx + 1..j].iter().collect();
                    return is_regex_candidate(&candidate).then_some(j);
                }
                _ => {}
            }
            j += 1;
        }
        None
    }
}

impl Iterator for Classifier {
    type Item = ClassifiedChar;

    fn next(&mut self) -> Option<ClassifiedChar> {
        let idx = self.idx;
        let c = *self.chars.get(idx)?;
        let mode = match self.state {
            State::Str(q) => {
                if c == q.as_char() && !is_escaped(&self.chars, idx) {
                    self.state = State::Code;
                }
                LexMode::Str(q)
            }
            State::LineComment => {
                if c == '\n' {
                    self.state = State::Code;
                    LexMode::Code
                } else {
                    LexMode::LineComment
                }
            }
            State::BlockComment { opened_at } => {
                // `/*/` does not close: the `/` may not reuse the opener's `*`.
                if c == '/' && idx >= opened_at + 3 && self.chars[idx - 1] == '*' {
                    self.state = State::Code;
                }
                LexMode::BlockComment
            }
            State::Regex { until } => {
                if idx + 1 >= until {
                    self.state = State::Code;
                }
                LexMode::Regex
            }
            State::Code => self.classify_code(idx, c),
        };
        self.idx += 1;
        Some(ClassifiedChar { idx, ch: c, mode })
    }
}

/// The division-vs-regex decision, kept in one place so the heuristic can be
/// swapped without touching the scan loop.
///
/// A candidate (the text between the slashes) is accepted when it is
/// non-empty, does not start or end with whitespace (`a / b` is division,
/// not `/ b; /`), does not start with `=` (the `/=` operator), and compiles
/// as a regular expression.
fn is_regex_candidate(candidate: &str) -> bool {
    let Some(first) = candidate.chars().next() else {
        return false;
    };
    if first.is_whitespace() || first == '=' {
        return false;
    }
    if candidate.chars().last().is_some_and(char::is_whitespace) {
        return false;
    }
    Regex::new(candidate).is_ok()
}

#[cfg(test)]
mod tests;
