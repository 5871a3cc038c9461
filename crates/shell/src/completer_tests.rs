// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::os::unix::fs::PermissionsExt;

use tempfile::tempdir;

use super::*;

fn make_executable(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\n").expect("write fixture");
    let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod");
    path
}

fn completer() -> ShellCompleter {
    ShellCompleter::new(["echo", "exit", "cd", "history"].into_iter())
}

#[test]
fn word_start_finds_the_beginning_of_the_current_token() {
    assert_eq!(ShellCompleter::word_start("echo hel", 8), 5);
    assert_eq!(ShellCompleter::word_start("hel", 3), 0);
    assert_eq!(ShellCompleter::word_start("", 0), 0);
}

#[test]
fn builtin_names_are_offered_as_candidates() {
    let c = completer();
    let matches = c.candidates("ex", "");
    let names: Vec<_> = matches.iter().map(|p| p.display.clone()).collect();
    assert!(names.contains(&"exit".to_string()));
    assert!(!names.contains(&"echo".to_string()));
}

#[test]
fn executables_on_path_are_offered_as_candidates() {
    let dir = tempdir().expect("tempdir");
    make_executable(dir.path(), "fooctl");
    let c = ShellCompleter::new(std::iter::empty());
    let matches = c.candidates("foo", &dir.path().display().to_string());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].display, "fooctl");
    assert_eq!(matches[0].replacement, "fooctl ");
}

#[test]
fn non_executable_files_on_path_are_not_offered() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("notes.txt"), "hi").expect("write fixture");
    let c = ShellCompleter::new(std::iter::empty());
    let matches = c.candidates("notes", &dir.path().display().to_string());
    assert!(matches.is_empty());
}

#[test]
fn candidates_are_deduplicated_and_sorted() {
    let dir = tempdir().expect("tempdir");
    make_executable(dir.path(), "echo");
    let c = completer();
    let path_env = format!("{}:{}", dir.path().display(), dir.path().display());
    let matches = c.candidates("ech", &path_env);
    assert_eq!(matches.iter().filter(|p| p.display == "echo").count(), 1);
}
