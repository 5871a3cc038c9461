// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Shell engine: wires the lexer, pipeline splitter, builtin registry,
//! path resolver, and pipeline executor together, and owns top-level error
//! handling.

use std::path::PathBuf;

use posh_history::HistoryStore;

use crate::builtins::{BuiltinContext, BuiltinRegistry};
use crate::env;
use crate::error::ShellError;
use crate::lexer;
use crate::path_resolver::PathResolver;
use crate::pipeline::Pipeline;
use crate::process::{PipelineExecutor, RunOutcome};

/// What the REPL should do after running one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Continue,
    Exit(i32),
}

/// Owns the `BuiltinRegistry`, `HistoryStore`, `PathResolver`, and (by
/// construction) the `PipelineExecutor`. Constructed once per process;
/// `run_line` is called once per line read from the `LineEditor`.
pub struct Shell {
    registry: BuiltinRegistry,
    /// Used by the pipeline executor to locate external executables.
    resolver: PathResolver,
    /// Used by the `type` builtin. Kept separate from `resolver` because
    /// [`crate::process::PipelineExecutor::run`] and [`BuiltinContext`] each
    /// need their own exclusive borrow of a resolver for the duration of a
    /// call; both memoize the same `PATH`, so the two caches never disagree,
    /// only duplicate a rescan the first time a name is looked up by both.
    type_resolver: PathResolver,
    history: HistoryStore,
    path_env: String,
    histfile: Option<PathBuf>,
}

impl Shell {
    /// Reads `PATH`/`HOME`/`HISTFILE` once at startup and loads any
    /// configured history file.
    pub fn new() -> Self {
        let mut history = HistoryStore::new();
        let histfile = env::histfile();
        if let Some(path) = &histfile {
            history.read(path);
        }
        Self {
            registry: BuiltinRegistry,
            resolver: PathResolver::new(),
            type_resolver: PathResolver::new(),
            history,
            path_env: env::path(),
            histfile,
        }
    }

    /// Lexes, splits, resolves, and runs one line of input.
    ///
    /// A line is recorded to history before execution (`history` includes
    /// itself), even if it later fails to parse or run — except `exit`
    /// itself, which is never recorded: `exit` flushes pending history to
    /// the histfile as part of terminating, and a restart should find only
    /// the commands that ran before it, not the `exit` call that ended the
    /// session.
    /// Every error is contained here: the caller always returns to the
    /// prompt after printing the diagnostic this method returns.
    pub fn run_line(&mut self, line: &str) -> Result<Turn, ShellError> {
        if line.split_whitespace().next() != Some("exit") {
            self.history.record(line);
        }

        let tokens = lexer::tokenize(line)?;
        let pipeline = Pipeline::build(&tokens)?;

        let mut ctx = BuiltinContext {
            history: &mut self.history,
            path_resolver: &mut self.type_resolver,
            path_env: self.path_env.clone(),
            default_histfile: self.histfile.clone(),
        };
        let outcome =
            PipelineExecutor::run(&pipeline, &mut self.resolver, &self.registry, &mut ctx, &self.path_env)?;

        Ok(Self::turn_for(outcome))
    }

    /// Flushes history to its configured sync file and reports the status to
    /// terminate with. EOF behaves exactly like a bare `exit`.
    pub fn handle_eof(&mut self) -> i32 {
        if let Some(path) = &self.histfile {
            self.history.append(path);
        }
        0
    }

    /// Candidate set for completion: builtin names unioned with every
    /// executable the path resolver can see.
    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> {
        self.registry.names()
    }

    pub fn path_env(&self) -> &str {
        &self.path_env
    }

    fn turn_for(outcome: RunOutcome) -> Turn {
        if outcome.terminate {
            Turn::Exit(outcome.code)
        } else {
            Turn::Continue
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
