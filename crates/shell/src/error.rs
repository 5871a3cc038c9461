// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crate-wide error type with span-aware diagnostics.

use crate::span::{context_snippet, Span};

/// Every recoverable failure mode in the shell core.
///
/// Each case carries enough context to render the one-line diagnostic the
/// REPL prints to stderr before returning to the prompt. Errors here never
/// poison shared state (`HistoryStore`, `PathResolver`); the caller always
/// recovers at the pipeline boundary.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A quote was opened but never closed before end of input.
    #[error("parse error: unterminated quote")]
    UnterminatedQuote { span: Span },

    /// A redirection operator was not followed by a target word, or a
    /// pipeline segment was empty (leading/trailing/doubled `|`).
    #[error("syntax error near '{near}'")]
    Syntax { near: String, span: Span },

    /// The command name did not resolve to a builtin or an executable on
    /// `PATH`.
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    /// Opening or writing a redirection target, or the history file, failed.
    #[error("{op}: {path}: {source}")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `fork`/`pipe`/`dup2`/`waitpid` failed at the OS level.
    #[error("{syscall} failed: {source}")]
    System {
        syscall: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ShellError {
    /// The source span this error points at, when it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ShellError::UnterminatedQuote { span } | ShellError::Syntax { span, .. } => Some(*span),
            ShellError::CommandNotFound { .. } | ShellError::Io { .. } | ShellError::System { .. } => None,
        }
    }

    /// A rich diagnostic with a caret under the offending span, falling back
    /// to the plain message when no span applies.
    pub fn diagnostic(&self, input: &str) -> String {
        match self.span() {
            Some(span) => format!("{}\n{}", self, context_snippet(input, span, 20)),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
