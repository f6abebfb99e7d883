//! # Modulith Core Configuration
//!
//! In-memory configuration documents and the repositories that serve them to
//! the startup executor's configuration-injection stage.
//!
//! - **[`ConfigData`]**: the key/value document handed to a `Configurable`
//!   module, with typed accessors.
//! - **[`file`]**: [`FileConfigRepository`], reading per-module TOML
//!   documents from `<root>/<app>/<module>.toml`.
//! - **[`memory`]**: [`MemoryConfigRepository`], an in-memory repository the
//!   host (or a test) populates up front.
//! - **[`error`]**: [`ConfigError`] covering lookup, I/O and parse failures.
//!
//! Any repository error during the configuration stage, including a missing
//! document, is fatal to startup.
pub mod error;
pub mod file;
pub mod memory;

pub use error::ConfigError;
pub use file::FileConfigRepository;
pub use memory::MemoryConfigRepository;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// In-memory representation of one module's configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigData {
    /// Raw configuration values
    #[serde(flatten)]
    values: HashMap<String, toml::Value>,
}

impl ConfigData {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get a configuration value, deserialized into the requested type
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| value.clone().try_into().ok())
    }

    /// Get a configuration value with default
    pub fn get_or<T: for<'de> Deserialize<'de>>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Set a configuration value
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), ConfigError> {
        let value = toml::Value::try_from(value)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get all keys
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// Whether the document holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge with another document, overriding existing values
    pub fn merge(&mut self, other: &ConfigData) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Parse a document from TOML text
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        toml::from_str(document).map_err(ConfigError::Deserialize)
    }

    /// Serialize the document to TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
