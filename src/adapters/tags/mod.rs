// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tag handlers.
//!
//! - `!env NAME` reads an environment variable
//! - `!text FILE` includes a text file, trimmed
//! - `!yaml FILE` / `!yaml [FILE, PATH]` includes a YAML document or part of it
//! - `!json FILE` / `!json [FILE, PATH]` does the same for JSON
//! - `!IN_MODE {mode: value, ...}` picks the branch of the active mode

pub mod env;
pub mod in_mode;
pub mod include;
pub mod text;

pub use env::EnvTagHandler;
pub use in_mode::InModeTagHandler;
pub use include::IncludeTagHandler;
pub use text::TextTagHandler;

use crate::domain::{ConfigError, Result};
use crate::ports::{NodeConstructor, RawNode};

/// Tag name of the environment substitution handler.
pub const ENV_TAG: &str = "env";
/// Tag name of the text inclusion handler.
pub const TEXT_TAG: &str = "text";
/// Tag name of the YAML inclusion handler.
pub const YAML_TAG: &str = "yaml";
/// Tag name of the JSON inclusion handler.
pub const JSON_TAG: &str = "json";
/// Tag name of the mode-conditional handler.
pub const IN_MODE_TAG: &str = "IN_MODE";

/// Constructs `operand` and renders it as text; it must be a non-null scalar.
pub(crate) fn scalar_operand(
    tag: &str,
    operand: &RawNode,
    constructor: &dyn NodeConstructor,
) -> Result<String> {
    let value = constructor.construct(operand)?;
    if value.is_scalar() && !value.is_null() {
        Ok(value.to_string())
    } else {
        Err(ConfigError::InvalidTagOperand {
            tag: tag.to_string(),
            expected: "a scalar",
        })
    }
}
