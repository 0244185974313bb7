// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment trait definition.

use std::env::VarError;

/// Read-only lookup of environment variables, used by the `!env` tag.
///
/// Lookups happen at load time; a resolved tree never observes later changes.
///
/// # Examples
///
/// ```rust
/// use smartcfg::ports::Environment;
/// use std::env::VarError;
///
/// struct Fixed;
///
/// impl Environment for Fixed {
///     fn var(&self, name: &str) -> Result<String, VarError> {
///         match name {
///             "MODE" => Ok("testing".to_string()),
///             _ => Err(VarError::NotPresent),
///         }
///     }
/// }
///
/// assert_eq!(Fixed.var("MODE").unwrap(), "testing");
/// ```
pub trait Environment: Send + Sync {
    /// Returns the current value of the variable `name`.
    fn var(&self, name: &str) -> Result<String, VarError>;
}
