// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn word_display() {
    let t = TokenKind::Word("hello".to_string());
    assert_eq!(t.to_string(), "hello");
}

#[test]
fn pipe_display() {
    assert_eq!(TokenKind::Pipe.to_string(), "|");
}

#[test]
fn redir_display_truncate_and_append() {
    // fd 1 prints without a leading digit: the lexer can't tell `>` from
    // `1>` apart once it's a RedirOp, and `>` is what's almost always typed.
    assert_eq!(TokenKind::Redir(RedirOp { fd: 1, append: false }).to_string(), ">");
    assert_eq!(TokenKind::Redir(RedirOp { fd: 2, append: true }).to_string(), "2>>");
}

#[test]
fn is_redirection_only_true_for_redir() {
    assert!(!TokenKind::Word("x".into()).is_redirection());
    assert!(!TokenKind::Pipe.is_redirection());
    assert!(TokenKind::Redir(RedirOp { fd: 1, append: false }).is_redirection());
}

#[test]
fn token_is_word_helper() {
    let t = Token::new(TokenKind::Word("x".into()), Span::empty(0));
    assert!(t.is_word());
    let t = Token::new(TokenKind::Pipe, Span::empty(0));
    assert!(!t.is_word());
}
