// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, the interface for plain
//! parsers that turn the content of a referenced file into a value tree.
//! "Plain" means no custom tags are resolved: a file pulled in through
//! `!yaml` or `!json` is data, not another extended document.

use crate::domain::{ConfigValue, Result};

/// A trait for parsing referenced documents.
///
/// # Examples
///
/// ```rust
/// use smartcfg::domain::{ConfigValue, Result};
/// use smartcfg::ports::DocumentParser;
///
/// struct LinesParser;
///
/// impl DocumentParser for LinesParser {
///     fn parse(&self, content: &str) -> Result<ConfigValue> {
///         Ok(ConfigValue::Sequence(content.lines().map(ConfigValue::from).collect()))
///     }
/// }
///
/// let value = LinesParser.parse("a\nb").unwrap();
/// assert_eq!(value.get_path("1").unwrap().as_str(), Some("b"));
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parses document content into a value tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigValue)` - The parsed document
    /// * `Err(ConfigError)` - The content is not a valid document
    fn parse(&self, content: &str) -> Result<ConfigValue>;
}
