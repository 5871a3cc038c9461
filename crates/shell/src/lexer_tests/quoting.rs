// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::lexer::tokenize;
use yare::parameterized;

use super::words;

#[parameterized(
    single_quoted_literal = { "echo 'hello   world'", vec!["echo", "hello   world"] },
    single_quoted_no_escape = { r"echo 'a\nb'", vec!["echo", r"a\nb"] },
    double_quoted_preserves_spaces = { r#"echo "hello   world""#, vec!["echo", "hello   world"] },
    double_quoted_escaped_quote = { r#"echo "a\"b""#, vec!["echo", "a\"b"] },
    double_quoted_escaped_backslash = { r#"echo "a\\b""#, vec!["echo", r"a\b"] },
    double_quoted_other_escape_is_literal = { r#"echo "a\nb""#, vec!["echo", r"a\nb"] },
    adjacent_quotes_concatenate = { "echo 'foo'\"bar\"", vec!["echo", "foobar"] },
    word_adjacent_to_quote_concatenates = { "echo foo'bar baz'qux", vec!["echo", "foobar bazqux"] },
    empty_single_quotes_is_empty_word = { "echo ''", vec!["echo", ""] },
    empty_double_quotes_is_empty_word = { "echo \"\"", vec!["echo", ""] },
)]
fn quoting_rules(input: &str, expected: Vec<&str>) {
    let tokens = tokenize(input).expect("valid input should not error");
    assert_eq!(words(&tokens), expected);
}

#[test]
fn full_scenario_escape_in_double_quotes() {
    // The \n inside double quotes is literal backslash-n, not a real newline.
    let tokens = tokenize(r#"echo "a\"b\\c\nd""#).expect("valid input");
    assert_eq!(words(&tokens), vec!["echo", "a\"b\\c\\nd"]);
}

#[test]
fn full_scenario_quoting() {
    // Internal whitespace inside double quotes is preserved verbatim.
    let tokens = tokenize(r#"echo "hello   world""#).expect("valid input");
    assert_eq!(words(&tokens), vec!["echo", "hello   world"]);
}
