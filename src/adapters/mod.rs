// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the document parsers, the file system and environment
//! adapters, and the built-in tag handlers.

pub mod env_var;
#[cfg(feature = "json")]
pub mod json_file;
pub mod local_fs;
pub mod tags;
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use env_var::EnvVarAdapter;
#[cfg(feature = "json")]
pub use json_file::JsonParser;
pub use local_fs::LocalFileSystem;
pub use tags::{EnvTagHandler, InModeTagHandler, IncludeTagHandler, TextTagHandler};
pub use yaml_file::YamlParser;
