// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration tree.
//!
//! This module provides the `ConfigValue` type, the node of a fully resolved
//! configuration document: every tag has already been replaced by its value,
//! so a tree of `ConfigValue`s is plain data that can be walked, queried and
//! serialized.

use crate::domain::config_path;
use crate::domain::errors::{ConfigError, Result};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered mapping used for configuration mappings.
///
/// Keys keep the order in which they appear in the source document.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A node of a resolved configuration tree.
///
/// Scalars keep their native type: an integer in the document stays an
/// integer, a string stays a string.
///
/// # Examples
///
/// ```
/// use smartcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.type_name(), "integer");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// An explicit or implicit null.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// A floating point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of values.
    Sequence(Vec<ConfigValue>),
    /// A mapping from string keys to values, in document order.
    Mapping(ConfigMap),
}

impl ConfigValue {
    /// Returns a short, human-readable name of the value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` if the value is neither a sequence nor a mapping.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, ConfigValue::Sequence(_) | ConfigValue::Mapping(_))
    }

    /// Returns `true` if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the string slice if the value is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcfg::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(ConfigValue::from(1).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if the value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the boolean if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the items if the value is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if the value is a mapping.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Resolves a dotted path relative to this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcfg::domain::ConfigValue;
    ///
    /// let value = ConfigValue::Sequence(vec![ConfigValue::from("a"), ConfigValue::from("b")]);
    /// assert_eq!(value.get_path("1").unwrap().as_str(), Some("b"));
    /// ```
    pub fn get_path(&self, path: &str) -> Result<&ConfigValue> {
        config_path::resolve(self, path)
    }

    /// Converts a constructed mapping key into its string form.
    ///
    /// Scalar keys are rendered as text; sequences and mappings cannot be keys.
    pub(crate) fn into_key(self) -> Result<String> {
        match self {
            ConfigValue::String(s) => Ok(s),
            ConfigValue::Sequence(_) | ConfigValue::Mapping(_) => Err(ConfigError::parse(
                format!("mapping keys must be scalars, found a {}", self.type_name()),
            )),
            scalar => Ok(scalar.to_string()),
        }
    }

    /// Inserts a constructed entry into `entries`.
    ///
    /// Keys are compared after rendering, so `1` and `"1"` in one mapping collide.
    pub(crate) fn insert_entry(
        entries: &mut ConfigMap,
        key: String,
        value: ConfigValue,
    ) -> Result<()> {
        if entries.contains_key(&key) {
            return Err(ConfigError::parse(format!("duplicate mapping key `{}`", key)));
        }
        entries.insert(key, value);
        Ok(())
    }

    /// Converts an untagged YAML scalar, returning `None` for collections and tagged nodes.
    pub(crate) fn from_yaml_scalar(value: &serde_yaml::Value) -> Option<ConfigValue> {
        match value {
            serde_yaml::Value::Null => Some(ConfigValue::Null),
            serde_yaml::Value::Bool(b) => Some(ConfigValue::Bool(*b)),
            serde_yaml::Value::Number(n) => Some(match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            serde_yaml::Value::String(s) => Some(ConfigValue::String(s.clone())),
            _ => None,
        }
    }
}

/// Returns `true` for YAML core schema tags such as `!!str`.
pub(crate) fn is_core_schema_tag(tag: &str) -> bool {
    tag.starts_with("!!") || tag.contains("tag:yaml.org,2002:")
}

/// Plain conversion of a YAML tree. Custom tags are rejected, YAML core
/// schema tags (`!!str`, `!!int`, ...) pass their value through.
impl TryFrom<&serde_yaml::Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::Sequence(items) => items
                .iter()
                .map(ConfigValue::try_from)
                .collect::<Result<Vec<_>>>()
                .map(ConfigValue::Sequence),
            serde_yaml::Value::Mapping(map) => {
                let mut entries = ConfigMap::with_capacity(map.len());
                for (key, val) in map {
                    let key = ConfigValue::try_from(key)?.into_key()?;
                    ConfigValue::insert_entry(&mut entries, key, ConfigValue::try_from(val)?)?;
                }
                Ok(ConfigValue::Mapping(entries))
            }
            serde_yaml::Value::Tagged(tagged) => {
                let tag = tagged.tag.to_string();
                if is_core_schema_tag(&tag) {
                    ConfigValue::try_from(&tagged.value)
                } else {
                    Err(ConfigError::UnknownTag {
                        tag: tag.trim_start_matches('!').to_string(),
                    })
                }
            }
            scalar => Ok(ConfigValue::from_yaml_scalar(scalar).unwrap_or(ConfigValue::Null)),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Bool(b) => ConfigValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Integer(i),
                None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => ConfigValue::String(s),
            serde_json::Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Mapping(map)
    }
}

/// Renders scalars bare and collections in YAML flow style.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigValue::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConfigValue::Null => serializer.serialize_unit(),
            ConfigValue::Bool(b) => serializer.serialize_bool(*b),
            ConfigValue::Integer(i) => serializer.serialize_i64(*i),
            ConfigValue::Float(x) => serializer.serialize_f64(*x),
            ConfigValue::String(s) => serializer.serialize_str(s),
            ConfigValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ConfigValue::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, val) in map {
                    out.serialize_entry(key, val)?;
                }
                out.end()
            }
        }
    }
}
