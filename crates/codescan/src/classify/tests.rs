use super::*;

/// One letter per char: `.` code, `s` string, `l` line comment, `b` block
/// comment, `r` regex literal.
fn fingerprint(text: &str) -> String {
    Classifier::new(text)
        .map(|cc| match cc.mode {
            LexMode::Code => '.',
            LexMode::Str(_) => 's',
            LexMode::LineComment => 'l',
            LexMode::BlockComment => 'b',
            LexMode::Regex => 'r',
        })
        .collect()
}

#[test]
fn yields_index_and_char() {
    let out: Vec<ClassifiedChar> = Classifier::new("ab").collect();
    assert_eq!(
        out,
        vec![
            ClassifiedChar {
                idx: 0,
                ch: 'a',
                mode: LexMode::Code
            },
            ClassifiedChar {
                idx: 1,
                ch: 'b',
                mode: LexMode::Code
            },
        ]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(Classifier::new("").count(), 0);
}

#[test]
fn strings_include_both_quotes() {
    assert_eq!(fingerprint("a'b'c"), ".sss.");
    assert_eq!(fingerprint("x = \"a\" + `b`"), "....sss...sss");
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(fingerprint("a'bc"), ".sss");
}

#[test]
fn line_comment_ends_before_newline() {
    assert_eq!(fingerprint("x // y\nz"), "..llll..");
}

#[test]
fn line_comment_without_newline_runs_to_end() {
    assert_eq!(fingerprint("x //y"), "..lll");
}

#[test]
fn url_scheme_is_not_a_comment() {
    assert_eq!(fingerprint("http://x"), "........");
}

#[test]
fn block_comment_includes_delimiters() {
    assert_eq!(fingerprint("a/*b*/c"), ".bbbbb.");
    assert_eq!(fingerprint("/**/"), "bbbb");
}

#[test]
fn slash_star_slash_does_not_close() {
    // The closing `/` may not reuse the opener's `*`.
    assert_eq!(fingerprint("/*/"), "bbb");
    assert_eq!(fingerprint("/*/ */x"), "bbbbbb.");
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    assert_eq!(fingerprint("a/*b"), ".bbb");
}

#[test]
fn regex_literal_spans_both_slashes() {
    assert_eq!(fingerprint("/ab+c/"), "rrrrrr");
}

#[test]
fn division_is_plain_code() {
    assert_eq!(fingerprint("a / b"), ".....");
}

#[test]
fn division_and_regex_in_one_statement() {
    assert_eq!(fingerprint("a / b; /ab+c/."), ".......rrrrrr.");
}

#[test]
fn divide_assign_is_not_a_regex() {
    assert_eq!(fingerprint("a /= b /c/"), ".......rrr");
}

#[test]
fn slash_in_character_class_does_not_close_regex() {
    assert_eq!(fingerprint("/a[/]b/x"), "rrrrrrr.");
}

#[test]
fn regex_candidate_aborts_at_newline() {
    // No closing slash on the same line: both slashes are division-like code.
    assert_eq!(fingerprint("a/b\nc/d"), ".......");
}

#[test]
fn invalid_regex_falls_back_to_code() {
    // `+q` is not a valid expression, so the slashes stay code.
    assert_eq!(fingerprint("x/+q/y"), "......");
}

#[test]
fn escaped_quote_does_not_open_string() {
    assert_eq!(fingerprint(r"\'a"), "...");
}

#[test]
fn escaped_slash_starts_neither_comment_nor_regex() {
    assert_eq!(fingerprint(r"\// x"), ".....");
}

#[test]
fn escaped_quote_inside_string_does_not_close() {
    assert_eq!(fingerprint(r#""a\"b""#), "ssssss");
}

#[test]
fn double_backslash_before_quote_closes() {
    assert_eq!(fingerprint(r#""a\\" x"#), "sssss..");
}

#[test]
fn string_content_shields_comment_and_regex_markers() {
    assert_eq!(fingerprint("'a // b'"), "ssssssss");
    assert_eq!(fingerprint("'/a/'"), "sssss");
}

#[test]
fn strings_disabled_exposes_interior() {
    let out: String = Classifier::with_strings("'a // b'", false)
        .map(|cc| if cc.is_code() { '.' } else { 'x' })
        .collect();
    assert_eq!(out, "...xxxxx");
}

#[test]
fn candidate_validation() {
    assert!(is_regex_candidate("ab+c"));
    assert!(is_regex_candidate("[a-z]{2,3}"));
    assert!(!is_regex_candidate(""));
    assert!(!is_regex_candidate(" b; "));
    assert!(!is_regex_candidate("= x"));
    assert!(!is_regex_candidate("+q"));
}
