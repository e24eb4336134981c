//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::{Config, GitHubSettings};
pub use validation::ConfigError;
