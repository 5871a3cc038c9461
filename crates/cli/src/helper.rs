// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rustyline` glue: a `Helper` whose completion behavior is the candidate
//! set built by [`posh_shell::completer::ShellCompleter`], with the
//! other three `Helper` capabilities left at `rustyline`'s defaults.
//!
//! Line-editing history (up/down-arrow navigation) is `rustyline`'s own
//! `DefaultHistory`, not the shared [`posh_history::HistoryStore`]: the two
//! are kept in sync by recording each accepted line into both, rather than
//! by implementing `rustyline::history::History` directly on `HistoryStore`.
//! `History` is a large, version-sensitive trait; duplicating a line of text
//! into two in-memory logs is cheaper than betting the build on having
//! reproduced that trait's exact surface correctly.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use posh_shell::completer::ShellCompleter;

pub struct ShellHelper {
    completer: ShellCompleter,
}

impl ShellHelper {
    pub fn new(completer: ShellCompleter) -> Self {
        Self { completer }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
