// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag handler trait definitions.
//!
//! A document node annotated with a tag such as `!env HOME` is handed to the
//! handler registered for that tag name. The handler receives the raw operand
//! node and a [`NodeConstructor`], which it uses to resolve the operand itself
//! (so tags nested inside operands are resolved too) before computing the
//! replacement value.

use crate::domain::{ConfigValue, Result};

/// An unresolved document node, as produced by the YAML parser.
///
/// Tagged nodes appear as [`serde_yaml::Value::Tagged`].
pub type RawNode = serde_yaml::Value;

/// Turns raw nodes into resolved values, dispatching tags to their handlers.
pub trait NodeConstructor {
    /// Resolves `node` and everything below it.
    fn construct(&self, node: &RawNode) -> Result<ConfigValue>;
}

/// A handler for one custom tag.
///
/// Handlers are stateless with respect to the nodes they resolve; any context
/// they need (base directory, environment) is fixed when they are built.
///
/// # Examples
///
/// ```rust
/// use smartcfg::domain::{ConfigValue, Result};
/// use smartcfg::ports::{NodeConstructor, RawNode, TagHandler};
///
/// struct Upper;
///
/// impl TagHandler for Upper {
///     fn tag(&self) -> &str {
///         "upper"
///     }
///
///     fn construct(&self, operand: &RawNode, constructor: &dyn NodeConstructor) -> Result<ConfigValue> {
///         let value = constructor.construct(operand)?;
///         Ok(ConfigValue::from(value.to_string().to_uppercase()))
///     }
/// }
///
/// assert_eq!(Upper.tag(), "upper");
/// ```
pub trait TagHandler: Send + Sync {
    /// Returns the tag name this handler resolves, without the leading `!`.
    fn tag(&self) -> &str;

    /// Resolves a tagged node given its operand.
    fn construct(&self, operand: &RawNode, constructor: &dyn NodeConstructor)
        -> Result<ConfigValue>;
}
