//! Comment-aware lexical scanning for annotated source text.
//!
//! Documentation fragments are often embedded in source files as
//! specially-marked comments. Pulling them out reliably does not need a full
//! language grammar, but it does need enough lexical awareness to never
//! mistake a brace inside a string for a real delimiter, or a `//` inside a
//! URL for a comment. This crate provides that minimal layer:
//!
//! - [`Classifier`] assigns every character one of the [`LexMode`]s (code,
//!   string, line comment, block comment, regex literal) in a single O(n)
//!   pass.
//! - [`sanitize`] removes comments and blanks regex literals so naive
//!   delimiter and quote scanning is safe afterwards.
//! - [`extract_armed`] / [`extract_pre_armed`] return a balanced-delimiter
//!   span, ignoring delimiters inside strings, comments, and regex literals.
//! - [`pop_string`] returns the first complete quoted string token.
//! - [`replace_range`] / [`first_position`] are the char-indexed text
//!   utilities the above are built on.
//!
//! Every operation is a pure function of its input: nothing panics, nothing
//! does I/O, and malformed input degrades to a documented not-found or
//! permissive result instead of an error. Calls are independent, so scanning
//! many files in parallel needs no synchronization.
//!
//! ```rust
//! use codescan::{ExtractOptions, extract_armed, sanitize};
//!
//! let src = "route('/users', { tag: 'users' }); // registers the handler";
//! let clean = sanitize(src);
//! assert_eq!(clean, "route('/users', { tag: 'users' }); ");
//!
//! let body = extract_armed(&clean, '{', &ExtractOptions::default()).unwrap();
//! assert_eq!(body, "{ tag: 'users' }");
//! ```

mod classify;
mod escape;
mod extract;
mod mode;
mod quote;
mod sanitize;
mod text;


pub use classify::{ClassifiedChar, Classifier};
pub use extract::{ExtractOptions, closing_for, extract_armed, extract_pre_armed};
pub use mode::{LexMode, QuoteKind};
pub use quote::pop_string;
pub use sanitize::{sanitize, sanitize_with};
pub use text::{first_position, replace_range};
