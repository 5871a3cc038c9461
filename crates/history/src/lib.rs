// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory command history with incremental file persistence.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// One recorded line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 1-based, contiguous, never reordered.
    pub seq: usize,
    pub text: String,
}

/// Failure opening, reading, or writing a history file. Never poisons
/// in-memory state: callers print [`HistoryError`] to stderr and continue.
#[derive(Debug, thiserror::Error)]
#[error("history: {op} {path}: {source}")]
pub struct HistoryError {
    op: &'static str,
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Ordered command log plus a per-path cursor of how much has been synced.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    cursors: HashMap<PathBuf, usize>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as the next entry, unless it is blank (after trimming)
    /// or an exact repeat of the immediately preceding entry.
    pub fn record(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if self.entries.last().is_some_and(|e| e.text == text) {
            return;
        }
        let seq = self.entries.len() + 1;
        self.entries.push(HistoryEntry { seq, text: text.to_string() });
    }

    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Truncate `path` and write every entry's text, one per line.
    pub fn write(&mut self, path: &Path) {
        match write_all(path, &self.entries) {
            Ok(()) => {
                self.cursors.insert(path.to_path_buf(), self.entries.len());
            }
            Err(err) => tracing::warn!(error = %err, "history write failed"),
        }
    }

    /// Read `path`, appending its non-blank lines as history entries, and
    /// advance the cursor for `path` to the new length. On failure, leave
    /// in-memory state and the cursor untouched.
    pub fn read(&mut self, path: &Path) {
        match read_lines(path) {
            Ok(lines) => {
                for line in lines {
                    if !line.trim().is_empty() {
                        self.record(&line);
                    }
                }
                self.cursors.insert(path.to_path_buf(), self.entries.len());
            }
            Err(err) => tracing::warn!(error = %err, "history read failed"),
        }
    }

    /// Open `path` for appending and write every entry recorded since the
    /// last sync to this path, advancing its cursor.
    pub fn append(&mut self, path: &Path) {
        let start = *self.cursors.get(path).unwrap_or(&0);
        let pending = &self.entries[start.min(self.entries.len())..];
        match append_all(path, pending) {
            Ok(()) => {
                self.cursors.insert(path.to_path_buf(), self.entries.len());
            }
            Err(err) => tracing::warn!(error = %err, "history append failed"),
        }
    }
}

fn write_all(path: &Path, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| HistoryError { op: "open", path: path.to_path_buf(), source })?;
    for entry in entries {
        writeln!(file, "{}", entry.text).map_err(|source| HistoryError { op: "write", path: path.to_path_buf(), source })?;
    }
    Ok(())
}

fn append_all(path: &Path, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| HistoryError { op: "open", path: path.to_path_buf(), source })?;
    for entry in entries {
        writeln!(file, "{}", entry.text).map_err(|source| HistoryError { op: "write", path: path.to_path_buf(), source })?;
    }
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>, HistoryError> {
    let file = std::fs::File::open(path).map_err(|source| HistoryError { op: "open", path: path.to_path_buf(), source })?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| HistoryError { op: "read", path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
