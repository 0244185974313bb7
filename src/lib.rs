// SPDX-License-Identifier: MIT OR Apache-2.0

//! A YAML configuration loader with custom tags, execution modes and lazy loading.
//!
//! Configuration documents are plain YAML extended with a few tags that are
//! resolved while the document is loaded:
//!
//! - `!env NAME` is replaced by the value of an environment variable
//! - `!text FILE` is replaced by the trimmed contents of a text file
//! - `!yaml FILE` and `!json FILE` include another document; the list form
//!   `[FILE, PATH]` includes only the value found at a dotted path inside it
//! - `!IN_MODE {mode: value, ...}` picks the value of the active mode
//!
//! The active mode is declared at the top level of the document with the
//! reserved keys `_mode` and `_modes`, which must be present together.
//! Values are read back with dotted paths such as `servers.0.host`; a failed
//! lookup names the shortest prefix that does not exist.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigValue`, `ConfigPath`, `ModeSelection`, errors)
//! - **Ports**: Trait definitions for collaborators (`DocumentParser`, `FileSystem`,
//!   `Environment`, `TagHandler`)
//! - **Adapters**: Implementations of the ports and the built-in tag handlers
//! - **Service**: The eager [`Config`] and the lazy [`SmartConfig`] loaders
//!
//! # Feature Flags
//!
//! - `json`: Enable the `!json` tag and `JsonParser` (default)
//!
//! # Quick Start
//!
//! ```rust
//! use smartcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let document = r#"
//! _mode: testing
//! _modes: [testing, stable]
//! database:
//!   host: !IN_MODE
//!     testing: localhost
//!     stable: db.internal
//!   port: 5432
//! "#;
//!
//! let config = Config::new(document, ".")?;
//! assert_eq!(config.query_str("database.host")?, "localhost");
//! assert_eq!(config.query_i64("database.port")?, 5432);
//!
//! let err = config.query("database.user.name").unwrap_err();
//! assert_eq!(err.to_string(), "Path `database.user` does not exist");
//! # Ok(())
//! # }
//! ```
//!
//! Files can be loaded lazily; nothing is read until the first query:
//!
//! ```rust,no_run
//! use smartcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = SmartConfig::new("config/app.yaml");
//! let workers = config.query_i64("workers")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{ConfigError, ConfigValue, Result};
pub use service::{Config, SmartConfig};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigPath, ConfigValue, ConfigurationService, ModeSelection, Result,
    };
    pub use crate::ports::{DocumentParser, Environment, FileSystem, TagHandler};
    pub use crate::service::{Config, ConfigBuilder, SmartConfig};

    // Re-export adapters based on feature flags
    pub use crate::adapters::{EnvVarAdapter, LocalFileSystem, YamlParser};
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
}
