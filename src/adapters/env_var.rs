// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapter.
//!
//! This module provides the adapter behind the `!env` tag. By default it reads
//! the live process environment on every lookup; an adapter built from a
//! fixed map serves tests and embedded use.

use crate::ports::Environment;
use std::collections::HashMap;
use std::env::{self, VarError};

/// Environment adapter for the `!env` tag.
///
/// # Examples
///
/// ```rust
/// use smartcfg::adapters::EnvVarAdapter;
/// use smartcfg::ports::Environment;
/// use std::collections::HashMap;
///
/// // Read the process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Only look up variables under a prefix: `!env HOST` reads `MYAPP_HOST`
/// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
///
/// // Use fixed values
/// let mut values = HashMap::new();
/// values.insert("MODE".to_string(), "testing".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
/// assert_eq!(adapter.var("MODE").unwrap(), "testing");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Optional prefix prepended to every looked-up name
    prefix: Option<String>,
    /// Fixed values replacing the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter reading the process environment.
    pub fn new() -> Self {
        Self {
            prefix: None,
            values: None,
        }
    }

    /// Creates an adapter that prepends `prefix` to every variable name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            values: None,
        }
    }

    /// Creates an adapter answering from `values` instead of the process environment.
    ///
    /// **Note**: This method is primarily intended for testing, where mutating
    /// the process environment races with other tests.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            values: Some(values),
        }
    }

    fn full_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, name),
            None => name.to_string(),
        }
    }
}

impl Environment for EnvVarAdapter {
    fn var(&self, name: &str) -> Result<String, VarError> {
        let name = self.full_name(name);
        match &self.values {
            Some(values) => values.get(&name).cloned().ok_or(VarError::NotPresent),
            None => env::var(&name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_values() {
        let mut values = HashMap::new();
        values.insert("MY_VAR".to_string(), "hello".to_string());
        let adapter = EnvVarAdapter::with_values(values);

        assert_eq!(adapter.var("MY_VAR").unwrap(), "hello");
        assert_eq!(adapter.var("OTHER"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_process_environment_is_read_live() {
        let adapter = EnvVarAdapter::new();
        env::set_var("SMARTCFG_ENV_ADAPTER_LIVE", "first");
        assert_eq!(adapter.var("SMARTCFG_ENV_ADAPTER_LIVE").unwrap(), "first");
        env::set_var("SMARTCFG_ENV_ADAPTER_LIVE", "second");
        assert_eq!(adapter.var("SMARTCFG_ENV_ADAPTER_LIVE").unwrap(), "second");
        env::remove_var("SMARTCFG_ENV_ADAPTER_LIVE");
    }

    #[test]
    fn test_prefix() {
        env::set_var("SMARTCFG_PREFIX_HOST", "db");
        let adapter = EnvVarAdapter::with_prefix("SMARTCFG_PREFIX_");
        assert_eq!(adapter.var("HOST").unwrap(), "db");
        env::remove_var("SMARTCFG_PREFIX_HOST");
    }

    #[test]
    fn test_missing_variable() {
        let adapter = EnvVarAdapter::new();
        assert!(adapter.var("SMARTCFG_SURELY_UNSET_VARIABLE").is_err());
    }
}
