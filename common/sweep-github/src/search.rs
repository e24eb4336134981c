//! Repository search

use crate::client::GitHubClient;
use crate::util::ensure_success;
use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

/// Largest page the search API serves
const MAX_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Run a repository search and return the raw response body
    ///
    /// The body is returned untyped so callers can decide how to treat items
    /// that lack the fields they care about.
    ///
    /// # Arguments
    /// * `expression` - Search expression, e.g. `"cli user:octocat"`
    /// * `per_page` - Number of results to request (clamped to 1..=100)
    pub async fn search_repositories(&self, expression: &str, per_page: u32) -> Result<Value> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();

        let response = self
            .request(Method::GET, "search/repositories")
            .query(&[("q", expression), ("per_page", per_page.as_str())])
            .send()
            .await?;
        let response = ensure_success(response, "search repositories").await?;

        response
            .json()
            .await
            .context("Failed to parse repository search response")
    }
}
