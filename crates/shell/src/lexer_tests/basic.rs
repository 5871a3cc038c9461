// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::lexer::tokenize;
use crate::token::TokenKind;
use yare::parameterized;

use super::words;

#[parameterized(
    single_word = { "ls", vec!["ls"] },
    two_words = { "echo hi", vec!["echo", "hi"] },
    leading_whitespace = { "   echo hi", vec!["echo", "hi"] },
    trailing_whitespace = { "echo hi   ", vec!["echo", "hi"] },
    tabs_between_words = { "echo\thi", vec!["echo", "hi"] },
    repeated_internal_whitespace = { "echo   hi    there", vec!["echo", "hi", "there"] },
)]
fn splits_on_whitespace(input: &str, expected: Vec<&str>) {
    let tokens = tokenize(input).expect("valid input should not error");
    assert_eq!(words(&tokens), expected);
}

#[test]
fn empty_line_has_no_tokens() {
    let tokens = tokenize("").expect("empty input is valid");
    assert!(tokens.is_empty());
}

#[test]
fn blank_line_has_no_tokens() {
    let tokens = tokenize("   \t  ").expect("whitespace-only input is valid");
    assert!(tokens.is_empty());
}

#[test]
fn trailing_backslash_is_literal() {
    let tokens = tokenize("echo foo\\").expect("valid input");
    assert_eq!(words(&tokens), vec!["echo", "foo\\"]);
}

#[test]
fn backslash_escapes_next_char_unquoted() {
    let tokens = tokenize("echo foo\\ bar").expect("valid input");
    assert_eq!(words(&tokens), vec!["echo", "foo bar"]);
}

#[test]
fn backslash_escapes_pipe_unquoted() {
    let tokens = tokenize(r"echo a\|b").expect("valid input");
    assert_eq!(words(&tokens), vec!["echo", "a|b"]);
}

#[test]
fn pipe_emits_operator_token() {
    let tokens = tokenize("echo a | wc -l").expect("valid input");
    let pipe_count = tokens.iter().filter(|t| t.kind == TokenKind::Pipe).count();
    assert_eq!(pipe_count, 1);
    assert_eq!(words(&tokens), vec!["echo", "a", "wc", "-l"]);
}
