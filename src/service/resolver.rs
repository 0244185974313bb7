// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag resolution over raw document trees.
//!
//! A `TagResolver` is one parser configuration: a registry from tag name to
//! handler. Walking a raw tree with it yields a resolved tree in which no tag
//! survives. Different passes over the same document use different resolvers
//! rather than swapping handlers in a shared registry.

use crate::domain::config_value::is_core_schema_tag;
use crate::domain::{ConfigError, ConfigMap, ConfigValue, Result};
use crate::ports::{NodeConstructor, RawNode, TagHandler};
use serde_yaml::value::TaggedValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of tag handlers and the tree walk that applies them.
///
/// # Examples
///
/// ```rust
/// use smartcfg::adapters::{EnvTagHandler, EnvVarAdapter};
/// use smartcfg::ports::RawNode;
/// use smartcfg::service::TagResolver;
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let mut values = HashMap::new();
/// values.insert("USER".to_string(), "ann".to_string());
/// let resolver = TagResolver::new()
///     .with_handler(Arc::new(EnvTagHandler::new(Arc::new(EnvVarAdapter::with_values(values)))));
///
/// let raw: RawNode = serde_yaml::from_str("owner: !env USER").unwrap();
/// let value = resolver.resolve(&raw).unwrap();
/// assert_eq!(value.get_path("owner").unwrap().as_str(), Some("ann"));
/// ```
#[derive(Clone, Default)]
pub struct TagResolver {
    handlers: HashMap<String, Arc<dyn TagHandler>>,
}

impl TagResolver {
    /// Creates a resolver with no handlers.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` and returns the resolver.
    pub fn with_handler(mut self, handler: Arc<dyn TagHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Registers `handler`, returning the handler previously registered for
    /// the same tag, if any.
    pub fn register(&mut self, handler: Arc<dyn TagHandler>) -> Option<Arc<dyn TagHandler>> {
        self.handlers.insert(handler.tag().to_string(), handler)
    }

    /// Returns `true` if a handler is registered for `tag` (without the `!`).
    pub fn handles(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Resolves a raw tree into a resolved tree.
    pub fn resolve(&self, node: &RawNode) -> Result<ConfigValue> {
        self.construct(node)
    }

    fn construct_tagged(&self, tagged: &TaggedValue) -> Result<ConfigValue> {
        let tag = tagged.tag.to_string();
        if is_core_schema_tag(&tag) {
            return self.construct(&tagged.value);
        }

        let name = tag.trim_start_matches('!');
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTag {
                tag: name.to_string(),
            })?;
        tracing::debug!("Resolving tag !{}", name);
        handler.construct(&tagged.value, self)
    }
}

impl NodeConstructor for TagResolver {
    fn construct(&self, node: &RawNode) -> Result<ConfigValue> {
        match node {
            RawNode::Sequence(items) => items
                .iter()
                .map(|item| self.construct(item))
                .collect::<Result<Vec<_>>>()
                .map(ConfigValue::Sequence),
            RawNode::Mapping(map) => {
                let mut entries = ConfigMap::with_capacity(map.len());
                for (key, val) in map {
                    let key = self.construct(key)?.into_key()?;
                    ConfigValue::insert_entry(&mut entries, key, self.construct(val)?)?;
                }
                Ok(ConfigValue::Mapping(entries))
            }
            RawNode::Tagged(tagged) => self.construct_tagged(tagged),
            scalar => Ok(ConfigValue::from_yaml_scalar(scalar).unwrap_or(ConfigValue::Null)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(&'static str, ConfigValue);

    impl TagHandler for Constant {
        fn tag(&self) -> &str {
            self.0
        }

        fn construct(
            &self,
            _operand: &RawNode,
            _constructor: &dyn NodeConstructor,
        ) -> Result<ConfigValue> {
            Ok(self.1.clone())
        }
    }

    /// Resolves its operand and wraps it in a one-element sequence.
    struct Wrap;

    impl TagHandler for Wrap {
        fn tag(&self) -> &str {
            "wrap"
        }

        fn construct(
            &self,
            operand: &RawNode,
            constructor: &dyn NodeConstructor,
        ) -> Result<ConfigValue> {
            Ok(ConfigValue::Sequence(vec![constructor.construct(operand)?]))
        }
    }

    fn raw(content: &str) -> RawNode {
        serde_yaml::from_str(content).unwrap()
    }

    #[test]
    fn test_plain_tree() {
        let value = TagResolver::new()
            .resolve(&raw("a: 1\nb: [x, {c: true}]"))
            .unwrap();
        assert_eq!(value.get_path("a").unwrap().as_i64(), Some(1));
        assert_eq!(value.get_path("b.1.c").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_dispatch_by_tag_name() {
        let resolver = TagResolver::new()
            .with_handler(Arc::new(Constant("one", ConfigValue::from(1))))
            .with_handler(Arc::new(Constant("two", ConfigValue::from(2))));
        let value = resolver.resolve(&raw("a: !one x\nb: [!two y]")).unwrap();
        assert_eq!(value.get_path("a").unwrap().as_i64(), Some(1));
        assert_eq!(value.get_path("b.0").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_nested_tags_in_operands() {
        let resolver = TagResolver::new()
            .with_handler(Arc::new(Wrap))
            .with_handler(Arc::new(Constant("one", ConfigValue::from(1))));
        let value = resolver.resolve(&raw("a: !wrap [!one x]")).unwrap();
        assert_eq!(value.get_path("a.0.0").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_tagged_keys_are_resolved() {
        let resolver =
            TagResolver::new().with_handler(Arc::new(Constant("key", ConfigValue::from("k"))));
        let value = resolver.resolve(&raw("!key x: v")).unwrap();
        assert_eq!(value.get_path("k").unwrap().as_str(), Some("v"));
    }

    #[test]
    fn test_keys_colliding_after_resolution() {
        let resolver =
            TagResolver::new().with_handler(Arc::new(Constant("key", ConfigValue::from("k"))));
        let err = resolver.resolve(&raw("k: 1\n!key x: 2")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse configuration: duplicate mapping key `k`"
        );
    }

    #[test]
    fn test_unknown_tag() {
        let err = TagResolver::new().resolve(&raw("a: !nope x")).unwrap_err();
        assert_eq!(err.to_string(), "Could not determine a handler for the tag !nope");
    }

    #[test]
    fn test_register_replaces_and_reports() {
        let mut resolver = TagResolver::new();
        assert!(resolver
            .register(Arc::new(Constant("one", ConfigValue::from(1))))
            .is_none());
        let previous = resolver.register(Arc::new(Constant("one", ConfigValue::from(2))));
        assert_eq!(previous.unwrap().tag(), "one");
        assert!(resolver.handles("one"));
        assert!(!resolver.handles("two"));
    }
}
