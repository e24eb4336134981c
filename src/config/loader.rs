//! Configuration file loading and environment overrides
//!
//! Configuration is optional. Without a file every value falls back to the
//! defaults in [`crate::constants`]; a YAML file named by `GH_SWEEP_CONFIG`
//! may override any of them, and `GITHUB_API_URL` wins over both.

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubSettings {
    /// REST API root, e.g. `https://ghe.example.com/api/v3` for Enterprise
    pub api_base: String,
    /// GitHub CLI executable used for `auth status` and `auth token`
    pub gh_binary: String,
    /// Repositories requested per search
    pub per_page: u32,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base: constants::github::API_BASE.to_string(),
            gh_binary: constants::github::GH_BINARY.to_string(),
            per_page: constants::github::SEARCH_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub github: GitHubSettings,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read environment variables
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(constants::env::CONFIG_PATH) {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        if let Some(api_base) = lookup(constants::env::API_URL)
            && !api_base.trim().is_empty()
        {
            config.github.api_base = api_base.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Read a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from YAML text; empty text yields the defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Check every setting, reporting all problems at once
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::config_errors_to_anyhow)
    }
}
