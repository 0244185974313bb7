// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use smartcfg::adapters::EnvVarAdapter;
use smartcfg::ports::{Environment, FileSystem};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// The text file used by the `!text` tests.
#[allow(dead_code)]
pub const SOME_TEXT: &str = "\n  We all came out to Montreux\non the lake Geneva shoreline.\n\n";

/// `SOME_TEXT` with surrounding whitespace trimmed.
#[allow(dead_code)]
pub const SOME_TEXT_TRIMMED: &str = "We all came out to Montreux\non the lake Geneva shoreline.";

/// An in-memory file system that counts reads.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    reads: AtomicUsize,
}

#[allow(dead_code)]
impl MockFileSystem {
    /// Creates an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and returns the file system.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.write_file(path, content);
        self
    }

    /// Adds or replaces a file.
    pub fn write_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Removes a file.
    pub fn remove_file(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }

    /// Returns how many reads were attempted, including failed ones.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

/// Builds an environment answering from `pairs` only.
#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> Arc<dyn Environment> {
    let values = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    Arc::new(EnvVarAdapter::with_values(values))
}
