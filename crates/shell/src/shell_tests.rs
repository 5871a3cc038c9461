// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serial_test::serial;
use tempfile::tempdir;

use super::*;

#[test]
fn echo_runs_and_continues() {
    let mut shell = Shell::new();
    let turn = shell.run_line("echo hi").expect("valid line");
    assert_eq!(turn, Turn::Continue);
}

#[test]
fn exit_requests_termination_with_its_argument() {
    let mut shell = Shell::new();
    let turn = shell.run_line("exit 9").expect("valid line");
    assert_eq!(turn, Turn::Exit(9));
}

#[test]
fn unterminated_quote_is_an_error_not_a_panic() {
    let mut shell = Shell::new();
    let err = shell.run_line("echo 'oops").unwrap_err();
    assert!(matches!(err, ShellError::UnterminatedQuote { .. }));
}

#[test]
fn a_failed_line_still_leaves_the_shell_usable() {
    let mut shell = Shell::new();
    assert!(shell.run_line("echo 'oops").is_err());
    let turn = shell.run_line("echo still works").expect("valid line");
    assert_eq!(turn, Turn::Continue);
}

#[test]
fn every_line_is_recorded_including_history_itself() {
    let mut shell = Shell::new();
    shell.run_line("echo a").expect("valid line");
    shell.run_line("history").expect("valid line");
    let entries = shell.history.all();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "echo a");
    assert_eq!(entries[1].text, "history");
}

#[test]
fn exit_itself_is_never_recorded() {
    let mut shell = Shell::new();
    shell.run_line("echo a").expect("valid line");
    let turn = shell.run_line("exit").expect("valid line");
    assert_eq!(turn, Turn::Exit(0));
    let entries = shell.history.all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "echo a");
}

#[test]
#[serial]
fn histfile_env_var_is_loaded_on_construction() {
    let dir = tempdir().expect("tempdir");
    let histfile = dir.path().join("hist");
    std::fs::write(&histfile, "echo one\necho two\n").expect("write fixture");

    std::env::set_var("HISTFILE", &histfile);
    let shell = Shell::new();
    std::env::remove_var("HISTFILE");

    let entries = shell.history.all();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "echo one");
    assert_eq!(entries[1].text, "echo two");
}

#[test]
fn builtin_names_includes_every_registered_builtin() {
    let shell = Shell::new();
    let names: Vec<_> = shell.builtin_names().collect();
    assert!(names.contains(&"exit"));
    assert!(names.contains(&"cd"));
    assert!(names.contains(&"history"));
}
