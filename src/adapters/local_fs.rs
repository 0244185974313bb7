// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local file system adapter.

use crate::ports::FileSystem;
use std::fs;
use std::io;
use std::path::Path;

/// Reads files from the local file system.
///
/// Errors keep their [`io::ErrorKind`]; the message is prefixed with the path
/// that failed so a missing include is easy to locate.
///
/// # Examples
///
/// ```rust
/// use smartcfg::adapters::LocalFileSystem;
/// use smartcfg::ports::FileSystem;
/// use std::path::Path;
///
/// let err = LocalFileSystem::new()
///     .read_to_string(Path::new("/nonexistent/smartcfg.yaml"))
///     .unwrap_err();
/// assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a new local file system adapter.
    pub fn new() -> Self {
        LocalFileSystem
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tracing::debug!("Reading file {}", path.display());
        fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "content").unwrap();

        let content = LocalFileSystem::new()
            .read_to_string(temp_file.path())
            .unwrap();
        assert_eq!(content, "content");
    }

    #[test]
    fn test_missing_file_keeps_kind_and_names_path() {
        let path = Path::new("/nonexistent/path/to/config.yaml");
        let err = LocalFileSystem::new().read_to_string(path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/nonexistent/path/to/config.yaml"));
    }
}
