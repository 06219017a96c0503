//! Configuration management for sky-recap
//!
//! The tool runs with built-in defaults. A TOML file is only read when
//! `SKYRECAP_CONFIG` points at one, and `SKYRECAP_API_URL` overrides the
//! feed endpoint base (used by the integration tests to target a local server).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Public AppView endpoint; no authentication required
pub const DEFAULT_API_BASE: &str = "https://public.api.bsky.app/xrpc";

/// Largest page the getAuthorFeed endpoint accepts
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_limit: default_page_limit(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, the optional config file, and env overrides
    pub fn load() -> Result<Self> {
        let mut config = match resolve_config_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };

        if let Ok(base_url) = std::env::var("SKYRECAP_API_URL") {
            tracing::debug!("Using API base from SKYRECAP_API_URL: {}", base_url);
            config.api.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Reject values the feed endpoint cannot serve
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if !(1..=DEFAULT_PAGE_LIMIT).contains(&self.api.page_limit) {
            return Err(ConfigError::InvalidValue {
                field: "api.page_limit".to_string(),
                reason: format!("must be between 1 and {}", DEFAULT_PAGE_LIMIT),
            }
            .into());
        }

        Ok(())
    }
}

/// Resolve the configuration file path from `SKYRECAP_CONFIG`, if set
pub fn resolve_config_path() -> Option<PathBuf> {
    std::env::var("SKYRECAP_CONFIG")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
}
