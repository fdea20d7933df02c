/// Whether `chars[idx]` is escaped: preceded by an odd-length run of
/// backslashes.
///
/// Counting the whole run (rather than peeking at one or two preceding
/// characters) is what makes sequences like `\\"` close a string while `\"`
/// does not.
pub(crate) fn is_escaped(chars: &[char], idx: usize) -> bool {
    let mut run = 0usize;
    let mut i = idx;
    while i > 0 && chars[i - 1] == '\\' {
        run += 1;
        i -= 1;
    }
    run % 2 == 1
}
