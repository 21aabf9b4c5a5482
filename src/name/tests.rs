//! Tests for name decoding.

use super::{clean_name, parse_name, Terminator};
use crate::error::NameError;

#[test]
fn test_unquoted_stops_at_whitespace() {
    let (name, n) = parse_name("a/file.txt b/file.txt\n", Terminator::Whitespace, 1).unwrap();
    assert_eq!(name, "file.txt");
    assert_eq!(n, 10);

    let (name, n) = parse_name("a/file.txt\tb", Terminator::Whitespace, 0).unwrap();
    assert_eq!(name, "a/file.txt");
    assert_eq!(n, 10);
}

#[test]
fn test_unquoted_with_explicit_terminator_keeps_spaces() {
    let (name, n) = parse_name(
        "a/my file.txt\t2024-01-01 00:00:00 +0000\n",
        Terminator::Byte(b'\t'),
        1,
    )
    .unwrap();
    assert_eq!(name, "my file.txt");
    assert_eq!(n, 13);
}

#[test]
fn test_unquoted_stops_at_newline() {
    let (name, n) = parse_name("a/b/c\n", Terminator::Byte(b'\t'), 0).unwrap();
    assert_eq!(name, "a/b/c");
    assert_eq!(n, 5);
}

#[test]
fn test_empty_names_are_missing() {
    assert_eq!(parse_name("", Terminator::Whitespace, 0), Err(NameError::Missing));
    assert_eq!(parse_name(" x", Terminator::Whitespace, 0), Err(NameError::Missing));
    assert_eq!(parse_name("\n", Terminator::Byte(b'\t'), 0), Err(NameError::Missing));
    assert_eq!(parse_name("\"\"", Terminator::Whitespace, 0), Err(NameError::Missing));
}

#[test]
fn test_quoted_name_with_space_and_quote() {
    let input = r#""a/my \"odd\" file.txt" "b/other""#;
    let (name, n) = parse_name(input, Terminator::Whitespace, 1).unwrap();
    assert_eq!(name, "my \"odd\" file.txt");
    assert_eq!(name.as_bytes(), b"my \"odd\" file.txt");
    assert_eq!(&input[n..], r#" "b/other""#);
}

#[test]
fn test_quoted_name_ignores_terminator() {
    let (name, _) = parse_name("\"a/x\ty\"\tstamp", Terminator::Byte(b'\t'), 1).unwrap();
    assert_eq!(name, "x\ty");
}

#[test]
fn test_dev_null_is_not_cleaned() {
    let (name, n) = parse_name("/dev/null\n", Terminator::Byte(b'\t'), 1).unwrap();
    assert_eq!(name, "/dev/null");
    assert_eq!(n, 9);

    let (name, _) = parse_name("\"/dev/null\"", Terminator::Whitespace, 1).unwrap();
    assert_eq!(name, "/dev/null");
}

#[test]
fn test_clean_name_strips_prefix_and_collapses_slashes() {
    assert_eq!(clean_name("a//b/c", 1), "b/c");
    assert_eq!(clean_name("a/b", 0), "a/b");
    assert_eq!(clean_name("a//b//c", 0), "a/b/c");
    assert_eq!(clean_name("a/b/c/d", 2), "c/d");
    assert_eq!(clean_name("/abs/path", 1), "abs/path");
}

#[test]
fn test_clean_name_is_idempotent_on_clean_paths() {
    let once = clean_name("a//b/c", 1);
    assert_eq!(clean_name(&once, 0), once);
}

#[test]
fn test_clean_name_with_too_few_components() {
    assert_eq!(clean_name("file.txt", 1), "file.txt");
    assert_eq!(clean_name("a/file.txt", 3), "file.txt");
}

#[test]
fn test_line_end_terminator_keeps_whitespace() {
    let (name, n) = parse_name("dir/my file\twith tab\n", Terminator::LineEnd, 0).unwrap();
    assert_eq!(name, "dir/my file\twith tab");
    assert_eq!(n, 20);
}
