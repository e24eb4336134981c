//! Configuration validation utilities

use super::Config;
use anyhow::anyhow;

/// Largest page the search API serves
const MAX_PER_PAGE: u32 = 100;

/// Enumeration of possible configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// API base URL is empty or not http(s)
    InvalidApiBase(String),
    /// GitHub CLI executable name is empty
    EmptyGhBinary,
    /// Search page size outside 1..=100
    InvalidPageSize(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidApiBase(url) => {
                write!(f, "GitHub API base must be an http(s) URL: '{}'", url)
            }
            ConfigError::EmptyGhBinary => write!(f, "gh binary cannot be empty"),
            ConfigError::InvalidPageSize(size) => {
                write!(
                    f,
                    "per_page must be between 1 and {}: {}",
                    MAX_PER_PAGE, size
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let api_base = config.github.api_base.trim();
    if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
        errors.push(ConfigError::InvalidApiBase(config.github.api_base.clone()));
    }

    if config.github.gh_binary.trim().is_empty() {
        errors.push(ConfigError::EmptyGhBinary);
    }

    if !(1..=MAX_PER_PAGE).contains(&config.github.per_page) {
        errors.push(ConfigError::InvalidPageSize(config.github.per_page));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert a list of configuration errors to a single anyhow::Error
pub fn config_errors_to_anyhow(errors: Vec<ConfigError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Invalid configuration:\n  {}", messages.join("\n  "))
}
