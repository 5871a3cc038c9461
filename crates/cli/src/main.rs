// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive REPL binary: reads a line, hands it to [`posh_shell::Shell`],
//! prints any diagnostic, and loops.

mod helper;

use rustyline::config::{CompletionType, Config};
use rustyline::error::ReadlineError;
use rustyline::Editor;

use posh_shell::completer::ShellCompleter;
use posh_shell::{Shell, Turn};

use helper::ShellHelper;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    init_tracing();

    let mut shell = Shell::new();

    let config = Config::builder().completion_type(CompletionType::List).build();
    let helper = ShellHelper::new(ShellCompleter::new(shell.builtin_names()));
    let mut editor: Editor<ShellHelper, rustyline::history::DefaultHistory> =
        match Editor::with_config(config) {
            Ok(editor) => editor,
            Err(err) => {
                eprintln!("posh: could not start line editor: {err}");
                std::process::exit(1);
            }
        };
    editor.set_helper(Some(helper));

    let status = loop {
        match editor.readline("$ ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match shell.run_line(&line) {
                    Ok(Turn::Continue) => {}
                    Ok(Turn::Exit(code)) => break code,
                    Err(err) => eprintln!("{}", err.diagnostic(&line)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => break shell.handle_eof(),
            Err(err) => {
                eprintln!("posh: {err}");
                break 1;
            }
        }
    };

    std::process::exit(status);
}
