//! Client configuration
//!
//! Settings come from a TOML file when one is present and fall back to
//! defaults otherwise. Command-line flags override both.
//!
//! ```
//! use wordle_hints::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     [server]
//!     url = "http://hints.local:9000/api/hint"
//!
//!     [search]
//!     corpus = "wiki"
//!     limit = 20
//! "#).unwrap();
//!
//! assert_eq!(config.search.corpus, "wiki");
//! assert_eq!(config.search.limit.map(|l| l.get()), Some(20));
//! assert_eq!(config.server.timeout_secs, 30);
//! ```

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "wordle_hints.toml";

/// Corpus selected when the user has not picked one
pub const DEFAULT_CORPUS: &str = "web2";

const DEFAULT_SERVER_URL: &str = "http://localhost:8080/api/hint";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
}

/// Where the hint service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the hint API, e.g. `http://localhost:8080/api/hint`
    pub url: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVER_URL.to_string(),
            connect_timeout_secs: 2,
            timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What to ask the hint service for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub corpus: String,
    /// Maximum number of hints to return; unlimited when unset
    pub limit: Option<NonZeroU32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            corpus: DEFAULT_CORPUS.to_string(),
            limit: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, isn't valid TOML, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML or invalid values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults
    ///
    /// # Errors
    ///
    /// Returns error if a file was found but could not be loaded.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Checks values that TOML typing can't express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.server.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "server.url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.server.connect_timeout_secs == 0 || self.server.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "server timeouts must be at least one second".to_string(),
            ));
        }
        if self.search.corpus.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "search.corpus must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
