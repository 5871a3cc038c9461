// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search-path resolution with positive/negative memoization.

use std::collections::HashMap;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Resolves command names to absolute executable paths, memoizing both hits
/// and misses for the lifetime of the process.
#[derive(Debug, Default)]
pub struct PathResolver {
    cache: HashMap<String, Option<PathBuf>>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` against `path_env` (a colon-separated `PATH` value).
    ///
    /// A name containing a path separator bypasses the search path entirely:
    /// it is resolved relative to the current directory.
    pub fn resolve(&mut self, name: &str, path_env: &str) -> Option<PathBuf> {
        if name.contains('/') {
            return is_executable_file(Path::new(name)).then(|| PathBuf::from(name));
        }

        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }

        let found = path_env
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(name))
            .find(|candidate| is_executable_file(candidate));

        self.cache.insert(name.to_string(), found.clone());
        found
    }
}

fn is_executable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "path_resolver_tests.rs"]
mod tests;
