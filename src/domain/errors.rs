// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Configuration problems (bad paths, broken mode declarations, malformed tag
//! operands) are reported through the domain variants of [`ConfigError`].
//! Failures of the outside world, a missing file or an unset environment
//! variable, keep the platform error untouched in [`ConfigError::IoError`] and
//! [`ConfigError::EnvVarError`] so callers can tell the two families apart.

use std::env::VarError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use smartcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::PathNotFound {
///     path: "database.host".to_string(),
/// };
/// assert_eq!(error.to_string(), "Path `database.host` does not exist");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A path segment could not be resolved.
    #[error("Path `{path}` does not exist")]
    PathNotFound {
        /// The path prefix up to and including the failing segment
        path: String,
    },

    /// The list form of an include tag did not have exactly two elements.
    #[error("List notations of !{tag} tag requires 2 arguments, {given} were given.")]
    TagArity {
        /// The tag name without the leading `!`
        tag: String,
        /// Number of elements found in the operand
        given: usize,
    },

    /// Only one of `_mode` and `_modes` was declared.
    #[error("`{provided}` key is provided but `{missing}` is not")]
    ModeDeclarationIncomplete {
        /// The key that is present
        provided: &'static str,
        /// The key that is absent
        missing: &'static str,
    },

    /// `_modes` is present but is not a sequence.
    #[error("`_modes` key must be a list")]
    ModesNotList,

    /// `_mode` names a mode that `_modes` does not list.
    #[error("`_mode` value \"{value}\" is not in `_modes`")]
    ModeValueInvalid {
        /// The rendered `_mode` value
        value: String,
    },

    /// `!IN_MODE` was evaluated in a document without mode declarations.
    #[error("!IN_MODE tag is used but `_mode` and `_modes` keys are not provided")]
    InModeUnconfigured,

    /// An `!IN_MODE` branch names a mode that `_modes` does not list.
    #[error("Value \"{key}\" is not in `_modes`")]
    InModeUnknownKey {
        /// The offending branch key
        key: String,
    },

    /// A declared mode has no branch in an `!IN_MODE` mapping.
    #[error("Value for mode \"{mode}\" is not specified in tag !IN_MODE")]
    InModeMissingBranch {
        /// The mode without a branch
        mode: String,
    },

    /// A tag with no registered handler was found.
    #[error("Could not determine a handler for the tag !{tag}")]
    UnknownTag {
        /// The tag name without the leading `!`
        tag: String,
    },

    /// A tag operand has the wrong shape.
    #[error("Tag !{tag} expects {expected}")]
    InvalidTagOperand {
        /// The tag name without the leading `!`
        tag: String,
        /// Description of the accepted operand shape
        expected: &'static str,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A queried value does not have the requested type.
    #[error("Value at `{path}` is {found}, expected {expected}")]
    TypeMismatch {
        /// The queried path
        path: String,
        /// The requested type
        expected: &'static str,
        /// The type actually found
        found: &'static str,
    },

    /// Failed to deserialize a queried sub-tree into a Rust type.
    #[error("Failed to convert configuration value at `{path}` to type {target_type}: {source}")]
    TypeConversionError {
        /// The queried path
        path: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An environment variable referenced by `!env` could not be read.
    #[error("Environment variable `{name}` is not available: {source}")]
    EnvVarError {
        /// The variable name
        name: String,
        /// The error reported by the environment
        #[source]
        source: VarError,
    },

    /// An I/O error occurred while reading a document or referenced file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns `true` for failures of external resources (filesystem or
    /// environment) rather than problems with the configuration itself.
    pub fn is_external(&self) -> bool {
        matches!(self, ConfigError::IoError(_) | ConfigError::EnvVarError { .. })
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
