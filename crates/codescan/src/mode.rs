/// The quote character delimiting a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// `'…'`
    Single,
    /// `"…"`
    Double,
    /// `` `…` ``
    Backtick,
}

impl QuoteKind {
    /// The quote kind opened by `c`, if `c` is one of the three quote
    /// characters.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    /// The delimiter character for this quote kind.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// The lexical mode in effect at a single character of source text.
///
/// Exactly one mode applies at any index. Delimiters belong to the span they
/// open: both quotes of a string are [`LexMode::Str`], both slashes of a
/// regex literal are [`LexMode::Regex`], and `/* */` markers are
/// [`LexMode::BlockComment`]. The newline terminating a line comment is
/// ordinary [`LexMode::Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// Live code, safe to act on.
    Code,
    /// Inside a string literal of the given quote kind.
    Str(QuoteKind),
    /// Inside a `//` comment, up to but not including the newline.
    LineComment,
    /// Inside a `/* … */` comment, delimiters included.
    BlockComment,
    /// Inside a regex literal, both slashes included.
    Regex,
}

impl LexMode {
    /// Whether this index is live code.
    #[must_use]
    pub fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    /// Whether this index is inside a string literal.
    #[must_use]
    pub fn is_string(self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Whether this index is inside a line or block comment.
    #[must_use]
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}
