//! Repository search scoped to the authenticated user

use super::{RepositoryApi, RepositoryOption};
use crate::error::SweepError;
use serde_json::Value;
use std::collections::HashSet;

/// Build the search expression for `query`, restricted to `login`'s repositories
///
/// An empty query searches all of the user's repositories.
pub fn build_search_expression(query: &str, login: &str) -> String {
    format!("{} user:{}", query.trim(), login)
        .trim()
        .to_string()
}

/// Extract repository options from a search response
///
/// Items without a string `name` are skipped, as are repeated names. Order
/// follows the response.
pub fn parse_repository_options(body: &Value) -> Vec<RepositoryOption> {
    let Some(items) = body["items"].as_array() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .filter(|name| seen.insert(name.to_string()))
        .map(RepositoryOption::new)
        .collect()
}

/// Searches the hosting API for repositories owned by a given user
pub struct RepositorySearchClient<'a, A: RepositoryApi + ?Sized> {
    api: &'a A,
    per_page: u32,
}

impl<'a, A: RepositoryApi + ?Sized> RepositorySearchClient<'a, A> {
    pub fn new(api: &'a A, per_page: u32) -> Self {
        Self { api, per_page }
    }

    /// Search `login`'s repositories, optionally narrowed by `query`
    ///
    /// # Errors
    /// Returns [`SweepError::Request`] if the request fails or the response is
    /// not JSON
    pub async fn search(
        &self,
        query: &str,
        login: &str,
    ) -> Result<Vec<RepositoryOption>, SweepError> {
        let expression = build_search_expression(query, login);
        tracing::debug!(%expression, per_page = self.per_page, "searching repositories");

        let body = self
            .api
            .search_repositories(&expression, self.per_page)
            .await
            .map_err(SweepError::Request)?;

        let options = parse_repository_options(&body);
        tracing::debug!(count = options.len(), "search returned repositories");
        Ok(options)
    }
}
