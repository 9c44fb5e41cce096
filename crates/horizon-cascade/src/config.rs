//! Engine configuration.

use horizon_cascade_hooks::DEFAULT_FALLBACK;
use serde::Deserialize;

use crate::engine::StyleEngine;
use crate::{Error, Result};

/// Default prefix for generated custom property and keyframes names.
pub const DEFAULT_PREFIX: &str = "horizon";

/// Configuration for creating a [`StyleEngine`].
///
/// Can be deserialized from JSON (or any serde format); missing fields take
/// their default values.
///
/// ```
/// use horizon_cascade::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "hooks": [":hover"], "debug": true }"#).unwrap();
/// assert_eq!(config.hooks, vec![":hover".to_string()]);
/// assert_eq!(config.fallback, "revert-layer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hook names, in precedence order.
    pub hooks: Vec<String>,
    /// Pretty-print generated CSS and use readable identifiers.
    pub debug: bool,
    /// Keyword used when a conditional property has no default value.
    pub fallback: String,
    /// Prefix for generated custom property and keyframes names.
    pub prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hooks: vec![],
            debug: false,
            fallback: DEFAULT_FALLBACK.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given hooks.
    pub fn with_hooks<S: Into<String>>(hooks: impl IntoIterator<Item = S>) -> Self {
        Self {
            hooks: hooks.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields that are not validated elsewhere.
    pub fn validate(&self) -> Result<()> {
        let valid_prefix = !self.prefix.is_empty()
            && self
                .prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_prefix {
            return Err(Error::invalid_config(format!(
                "prefix '{}' must be a non-empty identifier",
                self.prefix
            )));
        }
        if self.fallback.trim().is_empty() {
            return Err(Error::invalid_config("fallback must not be empty"));
        }
        Ok(())
    }
}

/// Builder for creating a [`StyleEngine`] with custom configuration.
///
/// ```
/// use horizon_cascade::StyleEngine;
///
/// let engine = StyleEngine::builder()
///     .hook(":hover")
///     .hook("@media (min-width: 768px)")
///     .debug(true)
///     .build()
///     .unwrap();
/// assert_eq!(engine.registry().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook.
    pub fn hook(mut self, name: impl Into<String>) -> Self {
        self.config.hooks.push(name.into());
        self
    }

    /// Append several hooks.
    pub fn hooks<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config.hooks.extend(names.into_iter().map(Into::into));
        self
    }

    /// Enable or disable debug output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set the fallback keyword.
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.config.fallback = fallback.into();
        self
    }

    /// Set the generated name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<StyleEngine> {
        StyleEngine::new(self.config)
    }
}
