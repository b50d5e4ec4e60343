//! Configuration management for Drift
//!
//! Two layers: required credentials from the process environment
//! (`DRIFT_API_KEY`, `DRIFT_PROJECT_ID`), and optional tunables from a TOML
//! settings file under the XDG config directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the identity service.
    pub api_key: String,
    /// Project identifier for the document store.
    pub project_id: String,
    pub settings: Settings,
}

/// Optional tunables, all with working defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the identity service sign-in API.
    pub identity_url: String,
    /// Base URL of the identity service token refresh API.
    pub token_url: String,
    /// Base URL of the document store API.
    pub store_url: String,
    /// Number of posts fetched per feed load.
    pub feed_limit: u32,
    /// Maximum replies fetched per thread.
    pub reply_limit: u32,
    /// UI tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            identity_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            token_url: "https://securetoken.googleapis.com/v1".to_string(),
            store_url: "https://firestore.googleapis.com/v1".to_string(),
            feed_limit: 20,
            reply_limit: 100,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Resolve configuration from the environment and the settings file.
    ///
    /// `DRIFT_API_KEY` and `DRIFT_PROJECT_ID` are required; a missing
    /// settings file is not an error and yields defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = require_env("DRIFT_API_KEY")?;
        let project_id = require_env("DRIFT_PROJECT_ID")?;

        let settings_path = resolve_config_path()?;
        let settings = if settings_path.exists() {
            Settings::load_from_path(&settings_path)?
        } else {
            Settings::default()
        };

        Ok(Self {
            api_key,
            project_id,
            settings,
        })
    }
}

impl Settings {
    /// Load settings from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let settings: Settings = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(settings)
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name.to_string()).into()),
    }
}

/// Resolve the settings file path following the XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("DRIFT_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("drift").join("config.toml"))
}

/// Resolve the session cache path (same directory as the settings file)
pub fn resolve_session_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("drift").join("session.json"))
}
