// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted path expressions and the path resolver.
//!
//! A path such as `servers.0.host` is split on `.` and walked left to right:
//! mapping segments are looked up as keys, sequence segments are parsed as
//! base-10 indices. When a segment cannot be resolved, the error reports the
//! path up to and including that segment, so callers see how far resolution got.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::fmt;

/// A dotted path into a configuration tree.
///
/// # Examples
///
/// ```
/// use smartcfg::domain::ConfigPath;
///
/// let path = ConfigPath::from("database.replicas.0");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["database", "replicas", "0"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigPath(String);

impl ConfigPath {
    /// Creates a new `ConfigPath` from a `String`.
    pub fn new(path: String) -> Self {
        ConfigPath(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the dot-separated segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Walks `root` along this path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathNotFound`] carrying the joined prefix up to
    /// and including the first segment that could not be resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcfg::domain::{ConfigError, ConfigPath, ConfigValue};
    ///
    /// let root = ConfigValue::Sequence(vec![ConfigValue::from("one")]);
    /// assert_eq!(ConfigPath::from("0").resolve(&root).unwrap().as_str(), Some("one"));
    ///
    /// let err = ConfigPath::from("3.key").resolve(&root).unwrap_err();
    /// assert_eq!(err.to_string(), "Path `3` does not exist");
    /// ```
    pub fn resolve<'a>(&self, root: &'a ConfigValue) -> Result<&'a ConfigValue> {
        let segments: Vec<&str> = self.segments().collect();
        let mut current = root;
        for (i, segment) in segments.iter().enumerate() {
            let next = match current {
                ConfigValue::Mapping(map) => map.get(*segment),
                ConfigValue::Sequence(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            current = next.ok_or_else(|| ConfigError::PathNotFound {
                path: segments[..=i].join("."),
            })?;
        }
        Ok(current)
    }
}

/// Resolves `path` against `root`.
///
/// Convenience wrapper around [`ConfigPath::resolve`].
pub fn resolve<'a>(root: &'a ConfigValue, path: &str) -> Result<&'a ConfigValue> {
    ConfigPath::from(path).resolve(root)
}

impl From<String> for ConfigPath {
    fn from(s: String) -> Self {
        ConfigPath(s)
    }
}

impl From<&str> for ConfigPath {
    fn from(s: &str) -> Self {
        ConfigPath(s.to_string())
    }
}

impl AsRef<str> for ConfigPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
