// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The builtin command set: a closed, tagged-variant enumeration
//! dispatched by [`BuiltinRegistry`], not an open-ended trait hierarchy.

use std::io::Write;
use std::path::{Path, PathBuf};

use posh_history::HistoryStore;

use crate::path_resolver::PathResolver;

/// The result of running a builtin: its exit status, and whether it asked
/// the shell engine to terminate (only `exit` ever does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinOutcome {
    pub code: i32,
    pub terminate: bool,
}

impl BuiltinOutcome {
    fn code(code: i32) -> Self {
        Self { code, terminate: false }
    }
}

/// State a builtin may read or mutate while executing. Bound to real stdio
/// by the caller before `execute` runs: builtins write through
/// [`std::io::stdout`]/[`std::io::stderr`] directly, never through an
/// explicit stream parameter.
pub struct BuiltinContext<'a> {
    pub history: &'a mut HistoryStore,
    pub path_resolver: &'a mut PathResolver,
    pub path_env: String,
    pub default_histfile: Option<PathBuf>,
}

/// The closed set of builtin commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Exit,
    Echo,
    Pwd,
    Cd,
    Type,
    History,
}

impl BuiltinKind {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Exit => "exit",
            BuiltinKind::Echo => "echo",
            BuiltinKind::Pwd => "pwd",
            BuiltinKind::Cd => "cd",
            BuiltinKind::Type => "type",
            BuiltinKind::History => "history",
        }
    }

    pub fn execute(self, argv: &[String], ctx: &mut BuiltinContext) -> BuiltinOutcome {
        match self {
            BuiltinKind::Exit => exit(argv, ctx),
            BuiltinKind::Echo => echo(argv),
            BuiltinKind::Pwd => pwd(),
            BuiltinKind::Cd => cd(argv),
            BuiltinKind::Type => type_(argv, ctx),
            BuiltinKind::History => history(argv, ctx),
        }
    }
}

/// Maps builtin names to their [`BuiltinKind`].
#[derive(Debug, Default)]
pub struct BuiltinRegistry;

impl BuiltinRegistry {
    pub const ALL: &'static [BuiltinKind] = &[
        BuiltinKind::Exit,
        BuiltinKind::Echo,
        BuiltinKind::Pwd,
        BuiltinKind::Cd,
        BuiltinKind::Type,
        BuiltinKind::History,
    ];

    pub fn lookup(&self, name: &str) -> Option<BuiltinKind> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|k| k.name())
    }
}

fn exit(argv: &[String], ctx: &mut BuiltinContext) -> BuiltinOutcome {
    let code = match argv.first() {
        None => 0,
        Some(arg) => match arg.parse::<i32>() {
            Ok(n) => n,
            Err(_) => {
                let _ = writeln!(std::io::stderr(), "exit: {arg}: numeric argument required");
                2
            }
        },
    };
    if let Some(path) = &ctx.default_histfile {
        ctx.history.append(path);
    }
    BuiltinOutcome { code, terminate: true }
}

fn echo(argv: &[String]) -> BuiltinOutcome {
    let (suppress_newline, rest) = match argv.first().map(String::as_str) {
        Some("-n") => (true, &argv[1..]),
        _ => (false, argv),
    };
    let line = rest.join(" ");
    let mut stdout = std::io::stdout();
    if suppress_newline {
        let _ = write!(stdout, "{line}");
    } else {
        let _ = writeln!(stdout, "{line}");
    }
    BuiltinOutcome::code(0)
}

fn pwd() -> BuiltinOutcome {
    match std::env::current_dir() {
        Ok(dir) => {
            let _ = writeln!(std::io::stdout(), "{}", dir.display());
            BuiltinOutcome::code(0)
        }
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "pwd: {err}");
            BuiltinOutcome::code(1)
        }
    }
}

fn cd(argv: &[String]) -> BuiltinOutcome {
    let target: PathBuf = match argv.first().map(String::as_str) {
        None | Some("~") => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home),
            None => {
                let _ = writeln!(std::io::stderr(), "cd: HOME not set");
                return BuiltinOutcome::code(1);
            }
        },
        Some(arg) => PathBuf::from(arg),
    };

    match std::env::set_current_dir(&target) {
        Ok(()) => BuiltinOutcome::code(0),
        Err(_) => {
            let shown = argv.first().map(String::as_str).unwrap_or("~");
            let _ = writeln!(std::io::stderr(), "cd: {shown}: No such file or directory");
            BuiltinOutcome::code(1)
        }
    }
}

fn type_(argv: &[String], ctx: &mut BuiltinContext) -> BuiltinOutcome {
    let registry = BuiltinRegistry;
    let mut code = 0;
    let mut stdout = std::io::stdout();
    for name in argv {
        if registry.lookup(name).is_some() {
            let _ = writeln!(stdout, "{name} is a shell builtin");
        } else if let Some(path) = ctx.path_resolver.resolve(name, &ctx.path_env) {
            let _ = writeln!(stdout, "{name} is {}", path.display());
        } else {
            let _ = writeln!(stdout, "{name}: not found");
            code = 1;
        }
    }
    BuiltinOutcome::code(code)
}

fn history(argv: &[String], ctx: &mut BuiltinContext) -> BuiltinOutcome {
    let Some(first) = argv.first() else {
        print_entries(ctx.history.all());
        return BuiltinOutcome::code(0);
    };

    if let Ok(count) = first.parse::<usize>() {
        print_entries(ctx.history.last(count));
        return BuiltinOutcome::code(0);
    }

    match first.as_str() {
        "-c" => {
            ctx.history.clear();
            BuiltinOutcome::code(0)
        }
        "-w" => sync(argv, ctx, HistoryStore::write),
        "-r" => sync(argv, ctx, HistoryStore::read),
        "-a" => sync(argv, ctx, HistoryStore::append),
        other => {
            let _ = writeln!(std::io::stderr(), "history: {other}: invalid option");
            BuiltinOutcome::code(1)
        }
    }
}

fn sync(argv: &[String], ctx: &mut BuiltinContext, op: fn(&mut HistoryStore, &Path)) -> BuiltinOutcome {
    let path = match argv.get(1) {
        Some(p) => PathBuf::from(p),
        None => match &ctx.default_histfile {
            Some(p) => p.clone(),
            None => {
                let _ = writeln!(std::io::stderr(), "history: no history file configured");
                return BuiltinOutcome::code(1);
            }
        },
    };
    op(ctx.history, &path);
    BuiltinOutcome::code(0)
}

fn print_entries(entries: &[posh_history::HistoryEntry]) {
    let mut stdout = std::io::stdout();
    for entry in entries {
        let _ = writeln!(stdout, "   {}  {}", entry.seq, entry.text);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
