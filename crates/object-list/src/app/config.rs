//! Provider configuration.
//!
//! All keys are optional; missing keys keep their defaults.
//!
//! ```toml
//! default_value = "The main question"
//! replacement_id = 111
//! replacement_value = "Changed Item"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::data_item::DataItem;

/// Errors raised while loading a [`ProviderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read provider config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid TOML for this config.
    #[error("invalid provider config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Values the provider uses for the items it creates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Value given to items created by `add_item` and `add_items3`.
    pub default_value: String,
    /// Id of the item `change_item` puts in place.
    pub replacement_id: i32,
    /// Value of the item `change_item` puts in place.
    pub replacement_value: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_value: DataItem::DEFAULT_VALUE.to_string(),
            replacement_id: 111,
            replacement_value: "Changed Item".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: "object_list::app", path = %path.display(), ?config, "loaded provider config");
        Ok(config)
    }
}
