// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `!IN_MODE` tag.

use super::IN_MODE_TAG;
use crate::domain::{ConfigError, ConfigValue, ModeSelection, Result};
use crate::ports::{NodeConstructor, RawNode, TagHandler};

#[derive(Debug, Clone)]
enum Behavior {
    /// Stands in for every `!IN_MODE` node while the mode keys are discovered.
    Placeholder,
    /// Selects the branch of the active mode, or fails if no modes are declared.
    Select(ModeSelection),
}

/// Resolves `!IN_MODE {mode: value, ...}` to the value of the active mode.
///
/// Every branch is resolved before one is chosen, so tags inside any branch
/// must resolve even when their branch is not selected.
#[derive(Debug, Clone)]
pub struct InModeTagHandler {
    behavior: Behavior,
}

impl InModeTagHandler {
    /// Creates a handler selecting branches according to `selection`.
    pub fn new(selection: ModeSelection) -> Self {
        Self {
            behavior: Behavior::Select(selection),
        }
    }

    /// Creates the handler used while the mode keys are not known yet.
    ///
    /// It resolves every `!IN_MODE` node to null without looking at it.
    pub fn placeholder() -> Self {
        Self {
            behavior: Behavior::Placeholder,
        }
    }
}

impl TagHandler for InModeTagHandler {
    fn tag(&self) -> &str {
        IN_MODE_TAG
    }

    fn construct(
        &self,
        operand: &RawNode,
        constructor: &dyn NodeConstructor,
    ) -> Result<ConfigValue> {
        let selection = match &self.behavior {
            Behavior::Placeholder => return Ok(ConfigValue::Null),
            Behavior::Select(ModeSelection::Undeclared) => {
                return Err(ConfigError::InModeUnconfigured)
            }
            Behavior::Select(selection) => selection,
        };

        match constructor.construct(operand)? {
            ConfigValue::Mapping(branches) => selection.select(branches),
            _ => Err(ConfigError::InvalidTagOperand {
                tag: IN_MODE_TAG.to_string(),
                expected: "a mapping of mode names to values",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::TagResolver;
    use std::sync::Arc;

    fn resolve(handler: InModeTagHandler, content: &str) -> Result<ConfigValue> {
        let raw: RawNode = serde_yaml::from_str(content).unwrap();
        TagResolver::new()
            .with_handler(Arc::new(handler))
            .resolve(&raw)
    }

    fn active(mode: &str, modes: &[&str]) -> ModeSelection {
        ModeSelection::Active {
            mode: mode.to_string(),
            modes: modes.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_placeholder_ignores_operand() {
        let value = resolve(InModeTagHandler::placeholder(), "a: !IN_MODE not-a-mapping").unwrap();
        assert!(value.get_path("a").unwrap().is_null());
    }

    #[test]
    fn test_selects_active_branch() {
        let handler = InModeTagHandler::new(active("stable", &["testing", "stable"]));
        let value = resolve(handler, "a: !IN_MODE {testing: 1, stable: 2}").unwrap();
        assert_eq!(value.get_path("a").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_branches_are_resolved_deeply() {
        let handler = InModeTagHandler::new(active("testing", &["testing", "stable"]));
        let value = resolve(
            handler,
            "a: !IN_MODE\n  testing: {nested: !IN_MODE {testing: deep, stable: other}}\n  stable: x",
        )
        .unwrap();
        assert_eq!(value.get_path("a.nested").unwrap().as_str(), Some("deep"));
    }

    #[test]
    fn test_undeclared_modes_fail_on_use() {
        let handler = InModeTagHandler::new(ModeSelection::Undeclared);
        let err = resolve(handler.clone(), "a: !IN_MODE {testing: 1}").unwrap_err();
        assert!(matches!(err, ConfigError::InModeUnconfigured));

        let value = resolve(handler, "a: 1").unwrap();
        assert_eq!(value.get_path("a").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_scalar_operand_is_rejected() {
        let handler = InModeTagHandler::new(active("testing", &["testing"]));
        let err = resolve(handler, "a: !IN_MODE testing").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTagOperand { .. }));
    }
}
