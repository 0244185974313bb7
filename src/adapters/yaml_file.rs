// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! The same parser serves two roles: it produces the raw, still-tagged tree of
//! the main document, and it plainly parses files pulled in with `!yaml`.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{DocumentParser, RawNode};

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use smartcfg::adapters::YamlParser;
/// use smartcfg::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let value = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(value.get_path("database.port").unwrap().as_i64(), Some(5432));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Parses `content` into a raw tree, keeping custom tags in place.
    ///
    /// Merge keys (`<<: *anchor`) are expanded before any tag is resolved.
    pub fn parse_raw(&self, content: &str) -> Result<RawNode> {
        if content.trim().is_empty() {
            return Ok(RawNode::Null);
        }
        let parse_error = |e: serde_yaml::Error| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        };
        let mut raw: RawNode = serde_yaml::from_str(content).map_err(parse_error)?;
        raw.apply_merge().map_err(parse_error)?;
        Ok(raw)
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        ConfigValue::try_from(&self.parse_raw(content)?)
    }
}
