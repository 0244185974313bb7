// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `!env` tag.

use super::{scalar_operand, ENV_TAG};
use crate::domain::{ConfigError, ConfigValue, Result};
use crate::ports::{Environment, NodeConstructor, RawNode, TagHandler};
use std::sync::Arc;

/// Replaces `!env NAME` with the value of the environment variable `NAME`.
///
/// An unset variable fails with [`ConfigError::EnvVarError`].
pub struct EnvTagHandler {
    environment: Arc<dyn Environment>,
}

impl EnvTagHandler {
    /// Creates a handler reading from `environment`.
    pub fn new(environment: Arc<dyn Environment>) -> Self {
        Self { environment }
    }
}

impl TagHandler for EnvTagHandler {
    fn tag(&self) -> &str {
        ENV_TAG
    }

    fn construct(
        &self,
        operand: &RawNode,
        constructor: &dyn NodeConstructor,
    ) -> Result<ConfigValue> {
        let name = scalar_operand(ENV_TAG, operand, constructor)?;
        self.environment
            .var(&name)
            .map(ConfigValue::String)
            .map_err(|source| ConfigError::EnvVarError { name, source })
    }
}
