// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the document loaders.
//!
//! [`Config`] resolves a document eagerly and [`SmartConfig`] defers loading a
//! file until it is first queried. Both implement the `ConfigurationService`
//! trait. [`TagResolver`] and [`ReferenceLoader`] are the machinery they share.

pub mod document;
pub mod reference;
pub mod resolver;
pub mod smart_config;

// Re-export commonly used types
pub use document::{Config, ConfigBuilder};
pub use reference::ReferenceLoader;
pub use resolver::TagResolver;
pub use smart_config::SmartConfig;
