//! Session configuration: JSON, strict.
//!
//! Every field is optional; an empty object yields a session over the
//! default demo dataset with the seed recorded in history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use board_kernel::{default_seed, BoardConfig, SeedData, SeedError};

use crate::logging::{normalize_level, LoggingError};

pub const DEFAULT_SESSION_ID: &str = "default";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// All possible configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid session id {0:?}")]
    InvalidSessionId(String),
    #[error(transparent)]
    LogLevel(#[from] LoggingError),
    #[error("invalid seed: {0}")]
    Seed(#[from] SeedError),
}

/// Top-level configuration for one board session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub session_id: String,
    /// See `BoardConfig::record_seed`.
    pub record_seed: bool,
    pub log_level: String,
    /// Rolling log files go here; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    /// `None` selects the built-in demo dataset.
    pub seed: Option<SeedData>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: DEFAULT_SESSION_ID.to_string(),
            record_seed: BoardConfig::default().record_seed,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            record_seed: self.record_seed,
        }
    }

    pub fn seed_data(&self) -> SeedData {
        self.seed.clone().unwrap_or_else(default_seed)
    }

    /// Check the fields that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !board_kernel::ids::is_valid_id(&self.session_id) {
            return Err(ConfigError::InvalidSessionId(self.session_id.clone()));
        }
        normalize_level(&self.log_level)?;
        Ok(())
    }
}

/// Parse and validate a JSON config string.
pub fn parse_config(raw: &str) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<SessionConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw)
}
