// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tab completion over builtins and path executables.
//!
//! The two-tab/bell/longest-common-prefix protocol itself is not
//! reimplemented here: `rustyline`'s `CompletionType::List` mode already
//! gives a `Helper`'s [`Completer::complete`] exactly that behavior once it
//! is handed a candidate set. This module's only job is building that set.

use std::collections::BTreeSet;
use std::os::unix::fs::PermissionsExt;

use rustyline::completion::{Completer, Pair};
use rustyline::Context;

/// Candidate set builder: builtin names ∪ every executable file on `PATH`
/// whose name begins with the current prefix.
pub struct ShellCompleter {
    builtin_names: Vec<&'static str>,
}

impl ShellCompleter {
    pub fn new(builtin_names: impl Iterator<Item = &'static str>) -> Self {
        Self { builtin_names: builtin_names.collect() }
    }

    /// Byte offset of the start of the word containing `pos`.
    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos].rfind(|c: char| c.is_whitespace()).map(|i| i + 1).unwrap_or(0)
    }

    fn candidates(&self, prefix: &str, path_env: &str) -> Vec<Pair> {
        let mut names: BTreeSet<String> =
            self.builtin_names.iter().filter(|n| n.starts_with(prefix)).map(|n| n.to_string()).collect();

        for dir in path_env.split(':') {
            if dir.is_empty() {
                continue;
            }
            let Ok(read_dir) = std::fs::read_dir(dir) else {
                continue;
            };
            for entry in read_dir.flatten() {
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    continue;
                };
                if name.starts_with(prefix) && is_executable(&entry.path()) {
                    names.insert(name.to_string());
                }
            }
        }

        names
            .into_iter()
            .map(|name| {
                let replacement = format!("{name} ");
                Pair { display: name, replacement }
            })
            .collect()
    }
}

fn is_executable(path: &std::path::Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let _ = ctx;
        let start = Self::word_start(line, pos);
        let prefix = &line[start..pos];
        Ok((start, self.candidates(prefix, &crate::env::path())))
    }
}

#[cfg(test)]
#[path = "completer_tests.rs"]
mod tests;
