// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline segmentation and stage assembly.

use crate::error::ShellError;
use crate::redirect::{self, IoPlan, StdinPlan, StdoutPlan};
use crate::token::{Token, TokenKind};

/// One command in a pipeline: its resolved argv and I/O wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub argv: Vec<String>,
    pub io: IoPlan,
}

/// An ordered, non-empty sequence of [`Stage`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Split `tokens` on unquoted `|`, resolve each segment's redirections,
    /// and wire pipe slots between adjacent stages.
    pub fn build(tokens: &[Token]) -> Result<Pipeline, ShellError> {
        let segments = split(tokens)?;
        let n = segments.len();
        let mut stages = Vec::with_capacity(n);

        for (i, segment) in segments.iter().enumerate() {
            let (argv, mut io) = redirect::resolve(segment)?;
            if argv.is_empty() {
                return Err(ShellError::Syntax {
                    near: "empty pipeline segment".to_string(),
                    span: segment.first().map(|t| t.span).unwrap_or_default(),
                });
            }
            if i > 0 && io.stdin == StdinPlan::Inherit {
                io.stdin = StdinPlan::PipeRead;
            }
            if i < n - 1 && io.stdout == StdoutPlan::Inherit {
                io.stdout = StdoutPlan::PipeWrite;
            }
            stages.push(Stage { argv, io });
        }

        Ok(Pipeline { stages })
    }
}

/// Partition `tokens` into pipe-separated segments.
///
/// An empty segment — a leading, trailing, or doubled `|` — is a syntax
/// error.
fn split(tokens: &[Token]) -> Result<Vec<Vec<Token>>, ShellError> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for tok in tokens {
        if matches!(tok.kind, TokenKind::Pipe) {
            if current.is_empty() {
                return Err(ShellError::Syntax {
                    near: "|".to_string(),
                    span: tok.span,
                });
            }
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(tok.clone());
        }
    }

    if current.is_empty() {
        if segments.is_empty() {
            // Entirely empty input: zero stages, handled by the caller as a
            // no-op rather than a pipeline.
            return Ok(Vec::new());
        }
        return Err(ShellError::Syntax {
            near: "|".to_string(),
            span: tokens.last().map(|t| t.span).unwrap_or_default(),
        });
    }
    segments.push(current);

    Ok(segments)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
