use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the input binary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures while loading a listing configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
