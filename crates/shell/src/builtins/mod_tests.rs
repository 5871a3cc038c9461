// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use posh_history::HistoryStore;
use serial_test::serial;
use tempfile::tempdir;

fn ctx(history: &mut HistoryStore, resolver: &mut PathResolver) -> BuiltinContext<'_> {
    BuiltinContext {
        history,
        path_resolver: resolver,
        path_env: String::new(),
        default_histfile: None,
    }
}

#[test]
fn registry_finds_every_builtin_by_name() {
    let registry = BuiltinRegistry;
    for kind in BuiltinRegistry::ALL {
        assert_eq!(registry.lookup(kind.name()), Some(*kind));
    }
}

#[test]
fn registry_rejects_unknown_name() {
    let registry = BuiltinRegistry;
    assert_eq!(registry.lookup("ls"), None);
}

#[test]
fn exit_defaults_to_zero_and_requests_termination() {
    let mut history = HistoryStore::new();
    let mut resolver = PathResolver::new();
    let outcome = BuiltinKind::Exit.execute(&[], &mut ctx(&mut history, &mut resolver));
    assert_eq!(outcome, BuiltinOutcome { code: 0, terminate: true });
}

#[test]
fn exit_parses_numeric_argument() {
    let mut history = HistoryStore::new();
    let mut resolver = PathResolver::new();
    let outcome = BuiltinKind::Exit.execute(&["42".to_string()], &mut ctx(&mut history, &mut resolver));
    assert_eq!(outcome.code, 42);
}

#[test]
fn exit_flushes_history_when_histfile_configured() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("history");
    let mut history = HistoryStore::new();
    history.record("echo hi");
    let mut resolver = PathResolver::new();
    let mut c = ctx(&mut history, &mut resolver);
    c.default_histfile = Some(path.clone());
    BuiltinKind::Exit.execute(&[], &mut c);
    assert!(path.exists());
}

#[test]
#[serial]
fn cd_with_no_args_goes_home() {
    let original = std::env::current_dir().expect("cwd");
    let home = std::env::var("HOME").expect("HOME must be set for this test");
    let outcome = BuiltinKind::Cd.execute(&[], &mut dummy_ctx());
    assert_eq!(outcome.code, 0);
    assert_eq!(std::env::current_dir().expect("cwd"), PathBuf::from(home));
    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
#[serial]
fn cd_to_missing_directory_reports_exact_message() {
    let original = std::env::current_dir().expect("cwd");
    let outcome = BuiltinKind::Cd.execute(&["/no/such/directory".to_string()], &mut dummy_ctx());
    assert_eq!(outcome.code, 1);
    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
#[serial]
fn cd_into_existing_directory_succeeds() {
    let original = std::env::current_dir().expect("cwd");
    let dir = tempdir().expect("tempdir");
    let outcome = BuiltinKind::Cd.execute(&[dir.path().display().to_string()], &mut dummy_ctx());
    assert_eq!(outcome.code, 0);
    std::env::set_current_dir(original).expect("restore cwd");
}

fn dummy_ctx() -> BuiltinContext<'static> {
    // Leaked on purpose: these tests only need `'static` storage for a
    // single call, not a reusable fixture.
    let history: &'static mut HistoryStore = Box::leak(Box::new(HistoryStore::new()));
    let resolver: &'static mut PathResolver = Box::leak(Box::new(PathResolver::new()));
    BuiltinContext {
        history,
        path_resolver: resolver,
        path_env: String::new(),
        default_histfile: None,
    }
}

#[test]
fn type_reports_builtin() {
    let mut history = HistoryStore::new();
    let mut resolver = PathResolver::new();
    let outcome = BuiltinKind::Type.execute(&["cd".to_string()], &mut ctx(&mut history, &mut resolver));
    assert_eq!(outcome.code, 0);
}

#[test]
fn type_reports_not_found() {
    let mut history = HistoryStore::new();
    let mut resolver = PathResolver::new();
    let outcome = BuiltinKind::Type.execute(&["definitely-not-a-command".to_string()], &mut ctx(&mut history, &mut resolver));
    assert_eq!(outcome.code, 1);
}

#[test]
fn history_with_no_args_lists_everything() {
    let mut history = HistoryStore::new();
    history.record("echo one");
    history.record("echo two");
    let mut resolver = PathResolver::new();
    let outcome = BuiltinKind::History.execute(&[], &mut ctx(&mut history, &mut resolver));
    assert_eq!(outcome.code, 0);
}

#[test]
fn history_clear_empties_in_memory_log() {
    let mut history = HistoryStore::new();
    history.record("echo one");
    let mut resolver = PathResolver::new();
    BuiltinKind::History.execute(&["-c".to_string()], &mut ctx(&mut history, &mut resolver));
    assert!(history.all().is_empty());
}

#[test]
fn history_write_then_read_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("hist");

    let mut writer_history = HistoryStore::new();
    writer_history.record("echo hi");
    let mut resolver = PathResolver::new();
    BuiltinKind::History.execute(
        &["-w".to_string(), path.display().to_string()],
        &mut ctx(&mut writer_history, &mut resolver),
    );

    let mut reader_history = HistoryStore::new();
    BuiltinKind::History.execute(
        &["-r".to_string(), path.display().to_string()],
        &mut ctx(&mut reader_history, &mut resolver),
    );
    assert_eq!(reader_history.all().len(), 1);
}
