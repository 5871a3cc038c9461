// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[path = "basic.rs"]
mod basic;
#[path = "quoting.rs"]
mod quoting;
#[path = "redirection.rs"]
mod redirection;
#[path = "errors.rs"]
mod errors;

fn words(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Word(w) => Some(w.as_str()),
            _ => None,
        })
        .collect()
}
