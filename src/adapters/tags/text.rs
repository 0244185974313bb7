// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `!text` tag.

use super::{scalar_operand, TEXT_TAG};
use crate::domain::{ConfigValue, Result};
use crate::ports::{NodeConstructor, RawNode, TagHandler};
use crate::service::ReferenceLoader;
use std::sync::Arc;

/// Replaces `!text FILE` with the file's contents, surrounding whitespace trimmed.
///
/// Relative paths are taken from the loader's base directory.
pub struct TextTagHandler {
    loader: Arc<ReferenceLoader>,
}

impl TextTagHandler {
    /// Creates a handler reading files through `loader`.
    pub fn new(loader: Arc<ReferenceLoader>) -> Self {
        Self { loader }
    }
}

impl TagHandler for TextTagHandler {
    fn tag(&self) -> &str {
        TEXT_TAG
    }

    fn construct(
        &self,
        operand: &RawNode,
        constructor: &dyn NodeConstructor,
    ) -> Result<ConfigValue> {
        let reference = scalar_operand(TEXT_TAG, operand, constructor)?;
        let content = self.loader.read_text(&reference)?;
        Ok(ConfigValue::String(content.trim().to_string()))
    }
}
