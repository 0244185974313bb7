// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mode declarations and mode-conditional branch selection.
//!
//! A document may declare an active mode under `_mode` and the allowed modes
//! under `_modes`. Both keys must be present together. Once validated, the
//! selection picks one branch out of each `!IN_MODE` mapping.

use crate::domain::config_value::{ConfigMap, ConfigValue};
use crate::domain::errors::{ConfigError, Result};

/// Reserved top-level key holding the active mode.
pub const MODE_KEY: &str = "_mode";

/// Reserved top-level key holding the list of allowed modes.
pub const MODES_KEY: &str = "_modes";

/// The validated mode declarations of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeSelection {
    /// Neither `_mode` nor `_modes` is declared.
    Undeclared,
    /// Both keys are declared and `mode` is one of `modes`.
    Active {
        /// The active mode
        mode: String,
        /// All allowed modes, in declaration order
        modes: Vec<String>,
    },
}

impl ModeSelection {
    /// Reads and validates `_mode` and `_modes` from the top level of `root`.
    ///
    /// A root that is not a mapping declares no modes.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcfg::domain::{ConfigValue, ModeSelection};
    ///
    /// let root: serde_yaml::Value =
    ///     serde_yaml::from_str("_mode: stable\n_modes: [testing, stable]").unwrap();
    /// let selection = ModeSelection::from_document(&ConfigValue::try_from(&root).unwrap()).unwrap();
    /// assert_eq!(selection.mode(), Some("stable"));
    /// ```
    pub fn from_document(root: &ConfigValue) -> Result<Self> {
        let (mode, modes) = match root.as_mapping() {
            Some(map) => (map.get(MODE_KEY), map.get(MODES_KEY)),
            None => (None, None),
        };

        let (mode, modes) = match (mode, modes) {
            (None, None) => return Ok(ModeSelection::Undeclared),
            (Some(_), None) => {
                return Err(ConfigError::ModeDeclarationIncomplete {
                    provided: MODE_KEY,
                    missing: MODES_KEY,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::ModeDeclarationIncomplete {
                    provided: MODES_KEY,
                    missing: MODE_KEY,
                })
            }
            (Some(mode), Some(modes)) => (mode, modes),
        };

        let modes: Vec<String> = modes
            .as_sequence()
            .ok_or(ConfigError::ModesNotList)?
            .iter()
            .map(ToString::to_string)
            .collect();
        let mode = mode.to_string();
        if !modes.contains(&mode) {
            return Err(ConfigError::ModeValueInvalid { value: mode });
        }

        Ok(ModeSelection::Active { mode, modes })
    }

    /// Returns the active mode, if declared.
    pub fn mode(&self) -> Option<&str> {
        match self {
            ModeSelection::Undeclared => None,
            ModeSelection::Active { mode, .. } => Some(mode),
        }
    }

    /// Returns the allowed modes; empty when undeclared.
    pub fn modes(&self) -> &[String] {
        match self {
            ModeSelection::Undeclared => &[],
            ModeSelection::Active { modes, .. } => modes,
        }
    }

    /// Picks the branch for the active mode out of an `!IN_MODE` mapping.
    ///
    /// Every branch key must be a declared mode, then every declared mode must
    /// have a branch. The first check runs over all keys before the second.
    pub fn select(&self, mut branches: ConfigMap) -> Result<ConfigValue> {
        let (mode, modes) = match self {
            ModeSelection::Undeclared => return Err(ConfigError::InModeUnconfigured),
            ModeSelection::Active { mode, modes } => (mode, modes),
        };

        if let Some(key) = branches.keys().find(|key| !modes.contains(*key)) {
            return Err(ConfigError::InModeUnknownKey { key: key.clone() });
        }
        if let Some(missing) = modes.iter().find(|m| !branches.contains_key(m.as_str())) {
            return Err(ConfigError::InModeMissingBranch {
                mode: missing.clone(),
            });
        }

        branches
            .swap_remove(mode.as_str())
            .ok_or_else(|| ConfigError::InModeMissingBranch { mode: mode.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(content: &str) -> Result<ModeSelection> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content).unwrap();
        ModeSelection::from_document(&ConfigValue::try_from(&raw).unwrap())
    }

    fn branches(content: &str) -> ConfigMap {
        let raw: serde_yaml::Value = serde_yaml::from_str(content).unwrap();
        match ConfigValue::try_from(&raw).unwrap() {
            ConfigValue::Mapping(map) => map,
            other => panic!("not a mapping: {:?}", other),
        }
    }

    #[test]
    fn test_undeclared() {
        assert_eq!(selection("a: 1").unwrap(), ModeSelection::Undeclared);
        assert_eq!(selection("- a").unwrap(), ModeSelection::Undeclared);
        assert_eq!(ModeSelection::Undeclared.mode(), None);
        assert!(ModeSelection::Undeclared.modes().is_empty());
    }

    #[test]
    fn test_mode_without_modes() {
        let err = selection("_mode: testing").unwrap_err();
        assert_eq!(err.to_string(), "`_mode` key is provided but `_modes` is not");
    }

    #[test]
    fn test_modes_without_mode() {
        let err = selection("_modes: [testing, stable]").unwrap_err();
        assert_eq!(err.to_string(), "`_modes` key is provided but `_mode` is not");
    }

    #[test]
    fn test_modes_not_a_list() {
        let err = selection("_mode: testing\n_modes: testing").unwrap_err();
        assert!(matches!(err, ConfigError::ModesNotList));
    }

    #[test]
    fn test_mode_not_in_modes() {
        let err = selection("_mode: production\n_modes: [testing, stable]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "`_mode` value \"production\" is not in `_modes`"
        );
    }

    #[test]
    fn test_active_selection() {
        let selection = selection("_mode: stable\n_modes: [testing, stable]").unwrap();
        assert_eq!(selection.mode(), Some("stable"));
        assert_eq!(selection.modes(), &["testing".to_string(), "stable".to_string()]);

        let value = selection.select(branches("testing: a\nstable: b")).unwrap();
        assert_eq!(value, ConfigValue::from("b"));
    }

    #[test]
    fn test_select_unknown_key() {
        let selection = selection("_mode: testing\n_modes: [testing, stable]").unwrap();
        let err = selection
            .select(branches("testing: a\nproduction: b"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Value \"production\" is not in `_modes`");
    }

    #[test]
    fn test_select_missing_branch() {
        let selection = selection("_mode: testing\n_modes: [testing, production, ci]").unwrap();
        let err = selection
            .select(branches("testing: a\nproduction: b"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value for mode \"ci\" is not specified in tag !IN_MODE"
        );
    }

    #[test]
    fn test_unknown_key_checked_before_missing_branch() {
        let selection = selection("_mode: testing\n_modes: [testing, stable]").unwrap();
        let err = selection.select(branches("testing: a\nother: b")).unwrap_err();
        assert!(matches!(err, ConfigError::InModeUnknownKey { .. }));
    }

    #[test]
    fn test_select_undeclared() {
        let err = ModeSelection::Undeclared
            .select(branches("testing: a"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InModeUnconfigured));
    }
}
