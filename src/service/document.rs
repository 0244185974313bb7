// SPDX-License-Identifier: MIT OR Apache-2.0

//! Eager document loading.
//!
//! A document is resolved in two passes over the same raw tree. The first pass
//! resolves every tag except `!IN_MODE`, which stands in as null, so that
//! `_mode` and `_modes` can be read even when they come from `!env` or an
//! included file. The second pass resolves everything, selecting `!IN_MODE`
//! branches by the validated mode.

use crate::adapters::tags::{EnvTagHandler, InModeTagHandler, IncludeTagHandler, TextTagHandler};
use crate::adapters::{EnvVarAdapter, LocalFileSystem, YamlParser};
use crate::domain::{ConfigValue, ConfigurationService, ModeSelection, Result};
use crate::ports::{Environment, FileSystem, TagHandler};
use crate::service::{ReferenceLoader, TagResolver};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A fully resolved configuration document.
///
/// # Examples
///
/// ```rust
/// use smartcfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::new(
///     "_mode: stable\n_modes: [testing, stable]\nworkers: !IN_MODE {testing: 1, stable: 8}",
///     ".",
/// )?;
/// assert_eq!(config.mode(), Some("stable"));
/// assert_eq!(config.query_i64("workers")?, 8);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Config {
    root: ConfigValue,
    modes: ModeSelection,
    base_dir: PathBuf,
}

impl Config {
    /// Resolves `document`, reading referenced files relative to `base_dir`.
    ///
    /// Environment variables come from the process environment and files from
    /// the local file system. Use [`Config::builder`] to replace either.
    ///
    /// # Errors
    ///
    /// Any error raised while parsing, validating modes, or resolving tags.
    pub fn new(document: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(document).base_dir(base_dir).build()
    }

    /// Creates a builder for `document`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use smartcfg::adapters::EnvVarAdapter;
    /// use smartcfg::prelude::*;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<()> {
    /// let mut values = HashMap::new();
    /// values.insert("DB_HOST".to_string(), "db.internal".to_string());
    ///
    /// let config = Config::builder("host: !env DB_HOST")
    ///     .environment(Arc::new(EnvVarAdapter::with_values(values)))
    ///     .build()?;
    /// assert_eq!(config.query_str("host")?, "db.internal");
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(document: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(document)
    }

    /// Returns the root of the resolved tree.
    pub fn root(&self) -> &ConfigValue {
        &self.root
    }

    /// Returns the active mode, if the document declares modes.
    pub fn mode(&self) -> Option<&str> {
        self.modes.mode()
    }

    /// Returns the declared modes; empty if the document declares none.
    pub fn modes(&self) -> &[String] {
        self.modes.modes()
    }

    /// Returns the directory referenced files were resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ConfigurationService for Config {
    fn query(&self, path: &str) -> Result<&ConfigValue> {
        self.root.get_path(path)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mode", &self.mode())
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Config`].
pub struct ConfigBuilder {
    document: String,
    base_dir: PathBuf,
    environment: Arc<dyn Environment>,
    file_system: Arc<dyn FileSystem>,
    custom: Vec<Arc<dyn TagHandler>>,
}

impl ConfigBuilder {
    /// Creates a builder for `document` with the default adapters and the
    /// current directory as base directory.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            base_dir: PathBuf::from("."),
            environment: Arc::new(EnvVarAdapter::new()),
            file_system: Arc::new(LocalFileSystem::new()),
            custom: Vec::new(),
        }
    }

    /// Sets the directory relative file references are resolved against.
    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets the environment read by `!env`.
    pub fn environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the file system read by `!text`, `!yaml` and `!json`.
    pub fn file_system(mut self, file_system: Arc<dyn FileSystem>) -> Self {
        self.file_system = file_system;
        self
    }

    /// Adds a handler for a custom tag.
    ///
    /// A handler whose tag name matches a built-in tag is ignored.
    pub fn with_tag_handler(mut self, handler: Arc<dyn TagHandler>) -> Self {
        self.custom.push(handler);
        self
    }

    /// Adds several custom tag handlers.
    pub fn with_tag_handlers<I>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn TagHandler>>,
    {
        self.custom.extend(handlers);
        self
    }

    /// Parses and resolves the document.
    pub fn build(self) -> Result<Config> {
        let raw = YamlParser::new().parse_raw(&self.document)?;

        tracing::debug!("Resolving mode declarations");
        let placeholder = self.resolver(InModeTagHandler::placeholder());
        let modes = ModeSelection::from_document(&placeholder.resolve(&raw)?)?;

        tracing::debug!("Resolving document");
        let resolver = self.resolver(InModeTagHandler::new(modes.clone()));
        let root = resolver.resolve(&raw)?;

        match modes.mode() {
            Some(mode) => tracing::info!("Loaded configuration in mode '{}'", mode),
            None => tracing::info!("Loaded configuration"),
        }

        Ok(Config {
            root,
            modes,
            base_dir: self.base_dir,
        })
    }

    fn resolver(&self, in_mode: InModeTagHandler) -> TagResolver {
        let loader = Arc::new(ReferenceLoader::new(
            self.base_dir.clone(),
            Arc::clone(&self.file_system),
        ));

        let mut resolver = TagResolver::new();
        for handler in &self.custom {
            resolver.register(Arc::clone(handler));
        }

        let mut builtins: Vec<Arc<dyn TagHandler>> = vec![
            Arc::new(EnvTagHandler::new(Arc::clone(&self.environment))),
            Arc::new(TextTagHandler::new(Arc::clone(&loader))),
            Arc::new(IncludeTagHandler::yaml(Arc::clone(&loader))),
            Arc::new(in_mode),
        ];
        #[cfg(feature = "json")]
        builtins.push(Arc::new(IncludeTagHandler::json(loader)));

        for handler in builtins {
            let tag = handler.tag().to_string();
            if resolver.register(handler).is_some() {
                tracing::warn!("Custom handler for !{} is shadowed by the built-in tag", tag);
            }
        }
        resolver
    }
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("base_dir", &self.base_dir)
            .field("custom_tags", &self.custom.iter().map(|h| h.tag()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use crate::ports::{NodeConstructor, RawNode};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> Arc<dyn Environment> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Arc::new(EnvVarAdapter::with_values(values))
    }

    #[test]
    fn test_plain_document() {
        let config = Config::new("a: 1\nb:\n  c: [x, y]", ".").unwrap();
        assert_eq!(config.query_i64("a").unwrap(), 1);
        assert_eq!(config.query_str("b.c.1").unwrap(), "y");
        assert_eq!(config.mode(), None);
        assert!(config.modes().is_empty());
    }

    #[test]
    fn test_mode_from_environment() {
        let document = "_mode: !env MODE\n_modes: [testing, stable]\nlevel: !IN_MODE {testing: debug, stable: warn}";
        let config = Config::builder(document)
            .environment(env(&[("MODE", "testing")]))
            .build()
            .unwrap();
        assert_eq!(config.mode(), Some("testing"));
        assert_eq!(config.query_str("level").unwrap(), "debug");
    }

    #[test]
    fn test_mode_keys_stay_in_tree() {
        let config = Config::new("_mode: a\n_modes: [a, b]", ".").unwrap();
        assert_eq!(config.query_str("_mode").unwrap(), "a");
        assert_eq!(config.query("_modes").unwrap().as_sequence().unwrap().len(), 2);
    }

    #[test]
    fn test_in_mode_without_declarations() {
        let err = Config::new("a: !IN_MODE {x: 1}", ".").unwrap_err();
        assert!(matches!(err, ConfigError::InModeUnconfigured));
    }

    #[test]
    fn test_base_dir_is_kept() {
        let config = Config::new("a: 1", "/srv/app").unwrap();
        assert_eq!(config.base_dir(), Path::new("/srv/app"));
    }

    struct Shout;

    impl TagHandler for Shout {
        fn tag(&self) -> &str {
            "shout"
        }

        fn construct(
            &self,
            operand: &RawNode,
            constructor: &dyn NodeConstructor,
        ) -> Result<ConfigValue> {
            let value = constructor.construct(operand)?;
            Ok(ConfigValue::from(value.to_string().to_uppercase()))
        }
    }

    struct FakeEnv;

    impl TagHandler for FakeEnv {
        fn tag(&self) -> &str {
            "env"
        }

        fn construct(&self, _: &RawNode, _: &dyn NodeConstructor) -> Result<ConfigValue> {
            Ok(ConfigValue::from("fake"))
        }
    }

    #[test]
    fn test_custom_tag_handler() {
        let config = Config::builder("greeting: !shout [!env WHO]")
            .environment(env(&[("WHO", "world")]))
            .with_tag_handler(Arc::new(Shout))
            .build()
            .unwrap();
        assert_eq!(config.query_str("greeting").unwrap(), "[WORLD]");
    }

    #[test]
    fn test_builtin_tags_win() {
        let config = Config::builder("user: !env WHO")
            .environment(env(&[("WHO", "ann")]))
            .with_tag_handlers(vec![Arc::new(FakeEnv) as Arc<dyn TagHandler>])
            .build()
            .unwrap();
        assert_eq!(config.query_str("user").unwrap(), "ann");
    }

    #[test]
    fn test_syntax_error() {
        let err = Config::new("a: [1, 2", ".").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
