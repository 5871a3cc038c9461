// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::lexer::tokenize;
use crate::token::{RedirOp, TokenKind};
use yare::parameterized;

fn redir_ops(input: &str) -> Vec<RedirOp> {
    tokenize(input)
        .expect("valid input should not error")
        .into_iter()
        .filter_map(|t| match t.kind {
            TokenKind::Redir(op) => Some(op),
            _ => None,
        })
        .collect()
}

#[parameterized(
    bare_truncate = { "echo hi > out", RedirOp { fd: 1, append: false } },
    explicit_stdout_truncate = { "echo hi 1> out", RedirOp { fd: 1, append: false } },
    bare_append = { "echo hi >> out", RedirOp { fd: 1, append: true } },
    explicit_stdout_append = { "echo hi 1>> out", RedirOp { fd: 1, append: true } },
    stderr_truncate = { "echo hi 2> out", RedirOp { fd: 2, append: false } },
    stderr_append = { "echo hi 2>> out", RedirOp { fd: 2, append: true } },
)]
fn recognizes_operator_form(input: &str, expected: RedirOp) {
    assert_eq!(redir_ops(input), vec![expected]);
}

#[test]
fn greedy_longest_match_prefers_append_over_truncate() {
    // ">>" must not lex as ">" followed by a literal ">".
    let tokens = tokenize("echo hi >>out").expect("valid input");
    let redirs: Vec<_> = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Redir(_)))
        .collect();
    assert_eq!(redirs.len(), 1);
}

#[test]
fn operator_mid_word_is_not_recognized() {
    // '>' embedded inside a word (no preceding boundary) stays literal.
    let tokens = tokenize("echo foo1>bar").expect("valid input");
    let words: Vec<&str> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Word(w) => Some(w.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(words, vec!["echo", "foo1>bar"]);
    assert!(tokens.iter().all(|t| !t.kind.is_redirection()));
}

#[test]
fn redirection_operator_followed_directly_by_target_no_space() {
    assert_eq!(redir_ops("echo hi >out"), vec![RedirOp { fd: 1, append: false }]);
}
