//! Plugin pipeline composition.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::PluginOptions;

/// Declarative plugin entry as read from configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    /// Plugin identifier (e.g. `catppuccin`).
    pub id: String,
    /// Plugin-specific options.
    #[serde(default)]
    pub options: PluginOptions,
}

impl PluginSpec {
    /// Plugin entry without options.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: PluginOptions::new(),
        }
    }

    /// Add an option entry.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.push(key, value);
        self
    }
}

/// Validated pipeline entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PluginConfig {
    /// Plugin identifier.
    pub id: String,
    /// Options with unique keys, in declared order.
    pub options: IndexMap<String, Value>,
}

/// Error returned when plugin composition fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PluginError {
    /// Plugin entry without an identifier.
    #[error("Plugin at position {position} has an empty id")]
    EmptyId {
        /// Zero-based position in the declared list.
        position: usize,
    },
    /// Option key declared twice for one plugin.
    #[error("Plugin '{plugin}' declares option '{key}' more than once")]
    DuplicateOptionKey {
        /// Plugin identifier.
        plugin: String,
        /// Repeated key.
        key: String,
    },
    /// Plugin declared twice.
    #[error("Plugin '{id}' is declared more than once")]
    DuplicatePlugin {
        /// Repeated identifier.
        id: String,
    },
}

/// Ordered, validated plugin list.
///
/// Index order is application order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PluginPipeline {
    plugins: Vec<PluginConfig>,
}

impl PluginPipeline {
    /// Entries in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, PluginConfig> {
        self.plugins.iter()
    }

    /// Number of plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the pipeline has no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Look up a plugin by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PluginConfig> {
        self.plugins.iter().find(|p| p.id == id)
    }

    /// Position of a plugin in application order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.plugins.iter().position(|p| p.id == id)
    }

    /// Plugin identifiers in application order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.id.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a PluginPipeline {
    type Item = &'a PluginConfig;
    type IntoIter = std::slice::Iter<'a, PluginConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validate plugin entries and compose them in declared order.
///
/// # Errors
///
/// Returns the first [`PluginError`] found, checking entries in order.
pub fn compose(specs: &[PluginSpec]) -> Result<PluginPipeline, PluginError> {
    let mut seen = HashSet::new();
    let mut plugins = Vec::with_capacity(specs.len());

    for (position, spec) in specs.iter().enumerate() {
        let id = spec.id.trim();
        if id.is_empty() {
            return Err(PluginError::EmptyId { position });
        }
        if !seen.insert(id) {
            return Err(PluginError::DuplicatePlugin { id: id.to_owned() });
        }

        let mut options = IndexMap::with_capacity(spec.options.len());
        for (key, value) in spec.options.iter() {
            if options.insert(key.to_owned(), value.clone()).is_some() {
                return Err(PluginError::DuplicateOptionKey {
                    plugin: id.to_owned(),
                    key: key.to_owned(),
                });
            }
        }

        plugins.push(PluginConfig {
            id: id.to_owned(),
            options,
        });
    }

    tracing::debug!(plugins = plugins.len(), "Composed plugin pipeline");

    Ok(PluginPipeline { plugins })
}
