// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading of files referenced from a document.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{DocumentParser, FileSystem};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads files referenced by tags, relative to the document's base directory.
///
/// Relative references are joined to the base directory; absolute references
/// are used as given.
pub struct ReferenceLoader {
    base_dir: PathBuf,
    file_system: Arc<dyn FileSystem>,
}

impl ReferenceLoader {
    /// Creates a loader resolving references against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, file_system: Arc<dyn FileSystem>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_system,
        }
    }

    /// Returns the base directory references are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the path a reference points to.
    pub fn resolve_path(&self, reference: &str) -> PathBuf {
        self.base_dir.join(reference)
    }

    /// Reads the referenced file as text.
    pub fn read_text(&self, reference: &str) -> Result<String> {
        let path = self.resolve_path(reference);
        tracing::debug!("Reading referenced file {}", path.display());
        Ok(self.file_system.read_to_string(&path)?)
    }

    /// Loads a document reference of the form `FILE` or `[FILE, PATH]`.
    ///
    /// `operand` is the already resolved operand of `tag`. The file is parsed
    /// plainly with `parser`, then projected through `PATH` if one is given.
    pub fn load(
        &self,
        tag: &str,
        operand: &ConfigValue,
        parser: &dyn DocumentParser,
    ) -> Result<ConfigValue> {
        let (file, path) = match operand {
            ConfigValue::Sequence(items) => match items.as_slice() {
                [file, path] => (file, Some(path)),
                _ => {
                    return Err(ConfigError::TagArity {
                        tag: tag.to_string(),
                        given: items.len(),
                    })
                }
            },
            other => (other, None),
        };

        if !file.is_scalar() || file.is_null() {
            return Err(ConfigError::InvalidTagOperand {
                tag: tag.to_string(),
                expected: "a file reference or a [file, path] list",
            });
        }

        let document = parser.parse(&self.read_text(&file.to_string())?)?;
        match path {
            Some(path) => Ok(document.get_path(&path.to_string())?.clone()),
            None => Ok(document),
        }
    }
}

impl fmt::Debug for ReferenceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceLoader")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}
