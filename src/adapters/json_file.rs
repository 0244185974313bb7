// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser adapter, used by the `!json` tag.

use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::DocumentParser;

/// JSON parser implementation.
///
/// Object keys keep their document order.
///
/// # Examples
///
/// ```rust
/// use smartcfg::adapters::JsonParser;
/// use smartcfg::ports::DocumentParser;
///
/// let value = JsonParser::new().parse(r#"{"servers": ["a", "b"]}"#).unwrap();
/// assert_eq!(value.get_path("servers.1").unwrap().as_str(), Some("b"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<ConfigValue> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;
        Ok(ConfigValue::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parser_types() {
        let value = JsonParser::new()
            .parse(r#"{"name": "app", "port": 8080, "ratio": 0.25, "debug": false, "extra": null}"#)
            .unwrap();
        assert_eq!(value.get_path("name").unwrap().as_str(), Some("app"));
        assert_eq!(value.get_path("port").unwrap().as_i64(), Some(8080));
        assert_eq!(value.get_path("ratio").unwrap().as_f64(), Some(0.25));
        assert_eq!(value.get_path("debug").unwrap().as_bool(), Some(false));
        assert!(value.get_path("extra").unwrap().is_null());
    }

    #[test]
    fn test_json_parser_invalid() {
        let result = JsonParser::new().parse("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
