// SPDX-License-Identifier: MIT OR Apache-2.0

//! File system trait definition.
//!
//! Referenced files (`!text`, `!yaml`, `!json`) and the document behind a lazy
//! loader are read through this port. Failures are reported as plain
//! [`std::io::Error`]s and reach the caller as [`ConfigError::IoError`].
//!
//! [`ConfigError::IoError`]: crate::domain::ConfigError::IoError

use std::io;
use std::path::Path;

/// Read-only access to files.
///
/// # Examples
///
/// ```rust
/// use smartcfg::ports::FileSystem;
/// use std::io;
/// use std::path::Path;
///
/// struct Empty;
///
/// impl FileSystem for Empty {
///     fn read_to_string(&self, path: &Path) -> io::Result<String> {
///         Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
///     }
/// }
///
/// assert!(Empty.read_to_string(Path::new("/etc/app.yaml")).is_err());
/// ```
pub trait FileSystem: Send + Sync {
    /// Reads the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
