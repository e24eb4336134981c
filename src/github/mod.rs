//! GitHub integration for the interactive flow
//!
//! - [`auth`]: token scope check and token resolution via the `gh` CLI
//! - [`search`]: turning a free-text query into repository options
//! - [`types`]: data structures shared with the prompts
//!
//! [`RepositoryApi`] is the seam between the flow and the network. It is
//! implemented for [`sweep_github::GitHubClient`]; tests substitute a
//! recording double.

pub mod auth;
pub mod search;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sweep_github::GitHubClient;

pub use auth::TokenCapabilityChecker;
pub use search::RepositorySearchClient;
pub use sweep_github::User;
pub use types::RepositoryOption;

/// Repository operations the flow performs against the hosting API
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// The user the credential belongs to
    async fn current_user(&self) -> Result<User>;

    /// Raw search response for `expression`
    async fn search_repositories(&self, expression: &str, per_page: u32) -> Result<Value>;

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()>;

    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<()>;
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.get_authenticated_user().await
    }

    async fn search_repositories(&self, expression: &str, per_page: u32) -> Result<Value> {
        GitHubClient::search_repositories(self, expression, per_page).await
    }

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
        GitHubClient::delete_repository(self, owner, repo).await
    }

    async fn archive_repository(&self, owner: &str, repo: &str) -> Result<()> {
        GitHubClient::archive_repository(self, owner, repo).await
    }
}
