// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! to the loader's collaborators: document parsers, the file system, the
//! process environment and tag handlers. These traits are implemented by
//! adapters in the adapters layer.

pub mod environment;
pub mod filesystem;
pub mod parser;
pub mod tag;

// Re-export commonly used types
pub use environment::Environment;
pub use filesystem::FileSystem;
pub use parser::DocumentParser;
pub use tag::{NodeConstructor, RawNode, TagHandler};
