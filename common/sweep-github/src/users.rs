//! Authenticated user lookup

use crate::client::GitHubClient;
use crate::util::ensure_success;
use anyhow::{Context, Result};
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

impl GitHubClient {
    /// Get the user the token belongs to
    pub async fn get_authenticated_user(&self) -> Result<User> {
        let response = self.request(Method::GET, "user").send().await?;
        let response = ensure_success(response, "get authenticated user").await?;

        response
            .json()
            .await
            .context("Failed to parse GitHub user response")
    }
}
