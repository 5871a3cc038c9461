// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline orchestration: builtin fast paths, and the fork/dup2/exec/wait
//! loop for everything else.

use std::fs::File;
use std::os::unix::io::AsRawFd;

use crate::builtins::{BuiltinContext, BuiltinKind, BuiltinRegistry};
use crate::error::ShellError;
use crate::pipeline::{Pipeline, Stage};
use crate::path_resolver::PathResolver;
use crate::redirect::{self, StderrPlan, StdoutPlan};

use super::runner::ExternalRunner;
use super::syscalls;

/// What running a pipeline produced: the observable exit code, and whether
/// a builtin asked the shell engine to terminate (only possible on the
/// single-stage, no-fork fast path — `exit` forked elsewhere only ends that
/// child).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub code: i32,
    pub terminate: bool,
}

/// Drives one parsed [`Pipeline`] to completion.
pub struct PipelineExecutor;

impl PipelineExecutor {
    pub fn run(
        pipeline: &Pipeline,
        resolver: &mut PathResolver,
        registry: &BuiltinRegistry,
        ctx: &mut BuiltinContext,
        path_env: &str,
    ) -> Result<RunOutcome, ShellError> {
        let stages = &pipeline.stages;
        if stages.is_empty() {
            return Ok(RunOutcome { code: 0, terminate: false });
        }

        if stages.len() == 1 {
            if let Some(kind) = registry.lookup(&stages[0].argv[0]) {
                let stage = &stages[0];
                let no_file_redirection =
                    stage.io.stdout == StdoutPlan::Inherit && stage.io.stderr == StderrPlan::Inherit;
                let start = std::time::Instant::now();
                let span = tracing::info_span!(
                    "shell.cmd",
                    cmd = %stage.argv[0],
                    args = ?&stage.argv[1..],
                    exit_code = tracing::field::Empty,
                    duration_ms = tracing::field::Empty,
                );
                let _enter = span.enter();
                let outcome = if no_file_redirection {
                    let outcome = kind.execute(&stage.argv[1..], ctx);
                    Ok(RunOutcome { code: outcome.code, terminate: outcome.terminate })
                } else {
                    run_builtin_with_file_redirection(kind, stage, ctx)
                };
                if let Ok(outcome) = &outcome {
                    span.record("exit_code", outcome.code);
                    span.record("duration_ms", start.elapsed().as_millis() as u64);
                }
                return outcome;
            }
        }

        let start = std::time::Instant::now();
        let span = tracing::info_span!(
            "shell.pipeline",
            stages = stages.len(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let _enter = span.enter();
        let outcome = run_forked(stages, resolver, registry, ctx, path_env);
        if let Ok(outcome) = &outcome {
            span.record("exit_code", outcome.code);
            span.record("duration_ms", start.elapsed().as_millis() as u64);
        }
        outcome
    }
}

/// Single builtin stage with a file redirection: no fork, rebind the real
/// stdout/stderr fds for the duration of the call.
fn run_builtin_with_file_redirection(
    kind: BuiltinKind,
    stage: &Stage,
    ctx: &mut BuiltinContext,
) -> Result<RunOutcome, ShellError> {
    let mut guard = StdioGuard::save()?;

    if let StdoutPlan::File(path, mode) = &stage.io.stdout {
        let file = redirect::open_write(path, *mode)?;
        rebind(1, &file)?;
        guard.keep_open(file);
    }
    if let StderrPlan::File(path, mode) = &stage.io.stderr {
        let file = redirect::open_write(path, *mode)?;
        rebind(2, &file)?;
        guard.keep_open(file);
    }

    let outcome = kind.execute(&stage.argv[1..], ctx);
    Ok(RunOutcome { code: outcome.code, terminate: outcome.terminate })
}

/// Saves fd 1/2 on construction and restores them on drop, regardless of how
/// the guarded region exits.
struct StdioGuard {
    saved_stdout: File,
    saved_stderr: File,
    opened: Vec<File>,
}

impl StdioGuard {
    fn save() -> Result<Self, ShellError> {
        Ok(Self {
            saved_stdout: dup(1)?,
            saved_stderr: dup(2)?,
            opened: Vec::new(),
        })
    }

    fn keep_open(&mut self, file: File) {
        self.opened.push(file);
    }
}

impl Drop for StdioGuard {
    fn drop(&mut self) {
        // Rust's stdout is line-buffered; a rebound fd 1 must see every byte
        // a builtin wrote before it's restored, not just whatever made it
        // past the last newline.
        use std::io::Write;
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        let _ = syscalls::dup2(self.saved_stdout.as_raw_fd(), 1);
        let _ = syscalls::dup2(self.saved_stderr.as_raw_fd(), 2);
    }
}

fn dup(fd: i32) -> Result<File, ShellError> {
    syscalls::dup(fd).map_err(|source| ShellError::System { syscall: "dup", source })
}

fn rebind(fd: i32, file: &File) -> Result<(), ShellError> {
    syscalls::dup2(file.as_raw_fd(), fd).map_err(|source| ShellError::System { syscall: "dup2", source })
}

/// One external stage, or any pipeline of length > 1: create all pipes,
/// fork every stage, close all pipes in the parent, then wait in order.
fn run_forked(
    stages: &[Stage],
    resolver: &mut PathResolver,
    registry: &BuiltinRegistry,
    ctx: &mut BuiltinContext,
    path_env: &str,
) -> Result<RunOutcome, ShellError> {
    let n = stages.len();
    let mut pipes = Vec::with_capacity(n.saturating_sub(1));
    for _ in 0..n.saturating_sub(1) {
        pipes.push(syscalls::pipe().map_err(|source| ShellError::System { syscall: "pipe", source })?);
    }

    let mut pids = Vec::with_capacity(n);
    for (index, stage) in stages.iter().enumerate() {
        // SAFETY: the child branch below performs only dup2/close (both
        // async-signal-safe) before calling execvp or _exit; it never
        // returns to this stack frame.
        let pid = unsafe { syscalls::fork() }.map_err(|source| ShellError::System { syscall: "fork", source })?;
        if pid == 0 {
            run_child_stage(index, n, stage, &pipes, resolver, registry, ctx, path_env);
        }
        pids.push(pid);
    }

    // The parent must close every pipe fd before waiting: an unclosed
    // writer held open here would keep a reader from ever seeing EOF.
    drop(pipes);

    let mut last_status = 0;
    for pid in pids {
        last_status = syscalls::waitpid(pid).map_err(|source| ShellError::System { syscall: "waitpid", source })?;
    }

    Ok(RunOutcome { code: last_status, terminate: false })
}

/// Runs inside the forked child for stage `index` of `n`. Never returns.
fn run_child_stage(
    index: usize,
    n: usize,
    stage: &Stage,
    pipes: &[(File, File)],
    resolver: &mut PathResolver,
    registry: &BuiltinRegistry,
    ctx: &mut BuiltinContext,
    path_env: &str,
) -> ! {
    if index > 0 {
        let _ = syscalls::dup2(pipes[index - 1].0.as_raw_fd(), 0);
    }
    if index < n - 1 {
        let _ = syscalls::dup2(pipes[index].1.as_raw_fd(), 1);
    }

    if let StdoutPlan::File(path, mode) = &stage.io.stdout {
        match redirect::open_write(path, *mode) {
            Ok(file) => {
                let _ = syscalls::dup2(file.as_raw_fd(), 1);
            }
            Err(err) => {
                eprintln!("{}: {err}", stage.argv[0]);
                syscalls::exit_now(1);
            }
        }
    }
    if let StderrPlan::File(path, mode) = &stage.io.stderr {
        match redirect::open_write(path, *mode) {
            Ok(file) => {
                let _ = syscalls::dup2(file.as_raw_fd(), 2);
            }
            Err(err) => {
                eprintln!("{}: {err}", stage.argv[0]);
                syscalls::exit_now(1);
            }
        }
    }

    for (r, w) in pipes {
        syscalls::close(r.as_raw_fd());
        syscalls::close(w.as_raw_fd());
    }

    if let Some(kind) = registry.lookup(&stage.argv[0]) {
        let outcome = kind.execute(&stage.argv[1..], ctx);
        // _exit never runs libc atexit handlers or flushes Rust's own stdio
        // buffers; do it by hand or the builtin's output never leaves the
        // process.
        use std::io::Write;
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        syscalls::exit_now(outcome.code);
    }

    match resolver.resolve(&stage.argv[0], path_env) {
        Some(path) => {
            let err = ExternalRunner::exec(&path.to_string_lossy(), &stage.argv);
            eprintln!("{}: {err}", stage.argv[0]);
            syscalls::exit_now(127);
        }
        None => {
            eprintln!("{}: command not found", stage.argv[0]);
            syscalls::exit_now(127);
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
