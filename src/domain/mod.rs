// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module holds the resolved value tree, the path resolver, mode
//! validation and the error taxonomy. It has no knowledge of files, the
//! process environment or tag handlers.

pub mod config_path;
pub mod config_value;
pub mod errors;
pub mod modes;
pub mod service;

// Re-export commonly used types
pub use config_path::ConfigPath;
pub use config_value::{ConfigMap, ConfigValue};
pub use errors::{ConfigError, Result};
pub use modes::{ModeSelection, MODES_KEY, MODE_KEY};
pub use service::ConfigurationService;
