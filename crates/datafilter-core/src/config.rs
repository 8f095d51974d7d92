//! Pipeline configuration, read from TOML.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Default nesting limit applied by a configured pipeline.
pub const DEFAULT_MAX_DEPTH: usize = 128;

///
/// FilterConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Deepest IR nesting a configured pipeline will recurse into.
    pub max_depth: usize,

    /// Log every intermediate stage at debug level.
    pub trace_stages: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace_stages: false,
        }
    }
}

impl FilterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read filter config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid filter config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// TESTS
///
