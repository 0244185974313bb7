// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazy document loading.
//!
//! [`SmartConfig`] remembers a path and does nothing else until it is first
//! queried. The first query reads and resolves the file; later queries reuse
//! the resolved tree.

use crate::adapters::{EnvVarAdapter, LocalFileSystem};
use crate::domain::{ConfigValue, ConfigurationService, Result};
use crate::ports::{Environment, FileSystem, TagHandler};
use crate::service::Config;
use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A configuration file that is loaded on first use.
///
/// Loading is thread-safe and happens at most once on success. If the first
/// load fails, the error is returned to that caller and the next query tries
/// again.
///
/// # Examples
///
/// ```rust,no_run
/// use smartcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = SmartConfig::new("/etc/myapp/config.yaml");
/// assert!(!config.is_loaded());
///
/// let host = config.query_str("database.host")?;
/// assert!(config.is_loaded());
/// # Ok(())
/// # }
/// ```
pub struct SmartConfig {
    path: PathBuf,
    environment: Arc<dyn Environment>,
    file_system: Arc<dyn FileSystem>,
    custom: Vec<Arc<dyn TagHandler>>,
    config: OnceCell<Config>,
}

impl SmartConfig {
    /// Creates a loader for the file at `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_adapters(
            path,
            Arc::new(EnvVarAdapter::new()),
            Arc::new(LocalFileSystem::new()),
        )
    }

    /// Creates a loader reading through the given environment and file system.
    pub fn with_adapters(
        path: impl Into<PathBuf>,
        environment: Arc<dyn Environment>,
        file_system: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            path: path.into(),
            environment,
            file_system,
            custom: Vec::new(),
            config: OnceCell::new(),
        }
    }

    /// Adds a handler for a custom tag, used when the file is loaded.
    pub fn with_tag_handler(mut self, handler: Arc<dyn TagHandler>) -> Self {
        self.custom.push(handler);
        self
    }

    /// Creates a loader for `config.yaml` in the OS configuration directory
    /// of the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use smartcfg::SmartConfig;
    ///
    /// let config = SmartConfig::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Creates a loader for `filename` in the OS configuration directory of
    /// the application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use smartcfg::SmartConfig;
    ///
    /// let config = SmartConfig::with_filename("myapp", "com.example", "settings.yaml").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Failed to determine project directories",
            )
        })?;

        Ok(Self::new(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path of the configuration file, as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` once the file has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.config.get().is_some()
    }

    /// Returns the resolved configuration, loading it on first use.
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| self.load())
    }

    fn load(&self) -> Result<Config> {
        let path = if self.path.is_absolute() {
            self.path.clone()
        } else {
            std::env::current_dir()?.join(&self.path)
        };
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        tracing::debug!("Loading configuration from {}", path.display());
        let document = self.file_system.read_to_string(&path)?;

        Config::builder(document)
            .base_dir(base_dir)
            .environment(Arc::clone(&self.environment))
            .file_system(Arc::clone(&self.file_system))
            .with_tag_handlers(self.custom.iter().cloned())
            .build()
    }
}

impl ConfigurationService for SmartConfig {
    fn query(&self, path: &str) -> Result<&ConfigValue> {
        self.config()?.query(path)
    }
}

impl fmt::Debug for SmartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartConfig")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
