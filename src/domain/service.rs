// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the query interface
//! shared by the eager and the lazy document loaders. Implementors provide
//! [`ConfigurationService::query`]; the typed helpers are derived from it.

use crate::domain::{ConfigError, ConfigValue, Result};
use serde::de::DeserializeOwned;

/// The main configuration query trait.
///
/// # Examples
///
/// ```rust
/// use smartcfg::domain::{ConfigValue, ConfigurationService, Result};
///
/// struct Fixed(ConfigValue);
///
/// impl ConfigurationService for Fixed {
///     fn query(&self, path: &str) -> Result<&ConfigValue> {
///         self.0.get_path(path)
///     }
/// }
///
/// let service = Fixed(ConfigValue::Sequence(vec![ConfigValue::from(8080)]));
/// assert_eq!(service.query_i64("0").unwrap(), 8080);
/// assert!(!service.has("1"));
/// ```
pub trait ConfigurationService {
    /// Retrieves the value at a dotted path.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::PathNotFound`] if a segment cannot be resolved
    /// * any error raised while building the tree, for loaders that build lazily
    fn query(&self, path: &str) -> Result<&ConfigValue>;

    /// Checks whether a value exists at `path`.
    ///
    /// Any error, including a failure to load the document, reads as `false`.
    fn has(&self, path: &str) -> bool {
        self.query(path).is_ok()
    }

    /// Retrieves a string value.
    fn query_str(&self, path: &str) -> Result<&str> {
        let value = self.query(path)?;
        value.as_str().ok_or_else(|| mismatch(path, "string", value))
    }

    /// Retrieves an integer value.
    fn query_i64(&self, path: &str) -> Result<i64> {
        let value = self.query(path)?;
        value.as_i64().ok_or_else(|| mismatch(path, "integer", value))
    }

    /// Retrieves a float value. Integers are widened.
    fn query_f64(&self, path: &str) -> Result<f64> {
        let value = self.query(path)?;
        value.as_f64().ok_or_else(|| mismatch(path, "float", value))
    }

    /// Retrieves a boolean value.
    fn query_bool(&self, path: &str) -> Result<bool> {
        let value = self.query(path)?;
        value.as_bool().ok_or_else(|| mismatch(path, "boolean", value))
    }

    /// Deserializes the sub-tree at `path` into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Deserialize;
    /// use smartcfg::prelude::*;
    ///
    /// #[derive(Deserialize)]
    /// struct Database {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// # fn main() -> Result<()> {
    /// let config = Config::new("database:\n  host: db\n  port: 5432", ".")?;
    /// let database: Database = config.query_as("database")?;
    /// assert_eq!(database.host, "db");
    /// assert_eq!(database.port, 5432);
    /// # Ok(())
    /// # }
    /// ```
    fn query_as<T: DeserializeOwned>(&self, path: &str) -> Result<T>
    where
        Self: Sized,
    {
        let value = self.query(path)?;
        let conversion_error = |source: serde_yaml::Error| ConfigError::TypeConversionError {
            path: path.to_string(),
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(source),
        };
        let yaml = serde_yaml::to_value(value).map_err(conversion_error)?;
        serde_yaml::from_value(yaml).map_err(conversion_error)
    }
}

fn mismatch(path: &str, expected: &'static str, found: &ConfigValue) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: found.type_name(),
    }
}
