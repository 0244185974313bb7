// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `!yaml` and `!json` tags.

#[cfg(feature = "json")]
use super::JSON_TAG;
use super::YAML_TAG;
#[cfg(feature = "json")]
use crate::adapters::JsonParser;
use crate::adapters::YamlParser;
use crate::domain::{ConfigValue, Result};
use crate::ports::{DocumentParser, NodeConstructor, RawNode, TagHandler};
use crate::service::ReferenceLoader;
use std::sync::Arc;

/// Includes an external document, whole or projected through a path.
///
/// The operand is either `FILE` or `[FILE, PATH]`. The included file is parsed
/// plainly: tags inside it are not resolved.
pub struct IncludeTagHandler {
    tag: String,
    loader: Arc<ReferenceLoader>,
    parser: Box<dyn DocumentParser>,
}

impl IncludeTagHandler {
    /// Creates a handler for `tag` that parses referenced files with `parser`.
    pub fn new(
        tag: impl Into<String>,
        loader: Arc<ReferenceLoader>,
        parser: Box<dyn DocumentParser>,
    ) -> Self {
        Self {
            tag: tag.into(),
            loader,
            parser,
        }
    }

    /// Creates the `!yaml` handler.
    pub fn yaml(loader: Arc<ReferenceLoader>) -> Self {
        Self::new(YAML_TAG, loader, Box::new(YamlParser::new()))
    }

    /// Creates the `!json` handler.
    #[cfg(feature = "json")]
    pub fn json(loader: Arc<ReferenceLoader>) -> Self {
        Self::new(JSON_TAG, loader, Box::new(JsonParser::new()))
    }
}

impl TagHandler for IncludeTagHandler {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn construct(
        &self,
        operand: &RawNode,
        constructor: &dyn NodeConstructor,
    ) -> Result<ConfigValue> {
        let operand = constructor.construct(operand)?;
        self.loader.load(&self.tag, &operand, self.parser.as_ref())
    }
}
