// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::ShellError;
use crate::lexer::tokenize;

#[test]
fn unterminated_single_quote_is_lex_error() {
    let err = tokenize("echo 'hello").unwrap_err();
    assert!(matches!(err, ShellError::UnterminatedQuote { .. }));
}

#[test]
fn unterminated_double_quote_is_lex_error() {
    let err = tokenize(r#"echo "hello"#).unwrap_err();
    assert!(matches!(err, ShellError::UnterminatedQuote { .. }));
}

#[test]
fn unterminated_quote_spans_the_opening_quote() {
    let err = tokenize("echo 'hello").unwrap_err();
    let span = err.span().expect("unterminated quote carries a span");
    assert_eq!(span.start, 5);
}

#[test]
fn trailing_backslash_inside_double_quotes_does_not_terminate() {
    // A lone trailing backslash inside an open double quote leaves the quote
    // unterminated rather than escaping the closing delimiter away entirely.
    let err = tokenize(r#"echo "hello\"#).unwrap_err();
    assert!(matches!(err, ShellError::UnterminatedQuote { .. }));
}

#[test]
fn unterminated_quote_diagnostic_includes_caret() {
    let err = tokenize("echo 'hello").unwrap_err();
    let rendered = err.diagnostic("echo 'hello");
    assert!(rendered.contains('^'));
}
