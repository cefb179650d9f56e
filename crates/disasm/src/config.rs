use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// How a listing is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `inst <n>: <hex> <text>`, one line per word.
    #[default]
    Text,
    /// A single JSON array of `{ index, word, text }` objects.
    Json,
}

/// Listing settings. Missing keys in a config file fall back to the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
}

impl Config {
    /// Reads a JSON config file, e.g. `{ "format": "json" }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[Config] loaded {} -> {:?}", path.display(), config);
        Ok(config)
    }
}
