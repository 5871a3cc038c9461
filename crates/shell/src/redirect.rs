// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redirection extraction and file I/O setup.

use std::fs::{File, OpenOptions};

use crate::error::ShellError;
use crate::token::{Token, TokenKind};

/// Whether a redirected stream truncates or appends to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Truncate,
    Append,
}

/// A single resolved redirection: which fd, which file, which mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirSpec {
    pub fd: u32,
    pub mode: Mode,
    pub target: String,
}

/// Where a stage's stdin comes from.
///
/// No `File` variant: the lexer never emits a `<` operator, so there is
/// nothing for `resolve` to produce one from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StdinPlan {
    #[default]
    Inherit,
    PipeRead,
}

/// Where a stage's stdout goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StdoutPlan {
    #[default]
    Inherit,
    PipeWrite,
    File(String, Mode),
}

/// Where a stage's stderr goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StderrPlan {
    #[default]
    Inherit,
    File(String, Mode),
}

/// The fully resolved I/O wiring for one pipeline stage.
///
/// `stdin`/`stdout` default to `PipeRead`/`PipeWrite` depending on the
/// stage's position in the pipeline (set by
/// [`crate::pipeline::Pipeline::from_segments`]); a file redirection always
/// overrides the pipe slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IoPlan {
    pub stdin: StdinPlan,
    pub stdout: StdoutPlan,
    pub stderr: StderrPlan,
}

/// Splits a stage's tokens into resolved `argv` and [`IoPlan`] file
/// redirections.
///
/// Only file targets are resolved here; pipe wiring between stages is filled
/// in afterwards by the pipeline assembler, since a single stage's tokens
/// carry no information about its neighbors.
pub fn resolve(tokens: &[Token]) -> Result<(Vec<String>, IoPlan), ShellError> {
    let mut argv = Vec::new();
    let mut io = IoPlan::default();

    let mut iter = tokens.iter().peekable();
    while let Some(tok) = iter.next() {
        match &tok.kind {
            TokenKind::Word(w) => argv.push(w.clone()),
            TokenKind::Pipe => unreachable!("pipeline splitter must strip OP_PIPE before resolve"),
            TokenKind::Redir(op) => {
                let target = match iter.next() {
                    Some(next) => match &next.kind {
                        TokenKind::Word(w) => w.clone(),
                        _ => {
                            return Err(ShellError::Syntax {
                                near: next.kind.to_string(),
                                span: next.span,
                            })
                        }
                    },
                    None => {
                        return Err(ShellError::Syntax {
                            near: tok.kind.to_string(),
                            span: tok.span,
                        })
                    }
                };
                let mode = if op.append { Mode::Append } else { Mode::Truncate };
                // Every redirect to the same fd is opened here, in source
                // order, so an earlier `> a` still truncates `a` even though
                // only the last target ends up wired to the fd.
                open_write(&target, mode)?;
                match op.fd {
                    1 => io.stdout = StdoutPlan::File(target, mode),
                    2 => io.stderr = StderrPlan::File(target, mode),
                    _ => unreachable!("lexer only produces fd 1 or 2 redirections"),
                }
            }
        }
    }

    if argv.is_empty() && (io.stdout != StdoutPlan::Inherit || io.stderr != StderrPlan::Inherit) {
        return Err(ShellError::Syntax {
            near: "redirection with no command".to_string(),
            span: tokens.first().map(|t| t.span).unwrap_or_default(),
        });
    }

    Ok((argv, io))
}

/// Open a redirection target for writing, per `mode`.
pub fn open_write(path: &str, mode: Mode) -> Result<File, ShellError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(matches!(mode, Mode::Truncate))
        .append(matches!(mode, Mode::Append))
        .open(path)
        .map_err(|source| ShellError::Io {
            op: "open",
            path: path.to_string(),
            source,
        })
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
