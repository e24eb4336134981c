//! Repository deletion and archiving

use crate::client::GitHubClient;
use crate::util::ensure_success;
use anyhow::Result;
use reqwest::Method;
use serde::Serialize;

/// Body of a `PATCH /repos/{owner}/{repo}` request
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RepositoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl RepositoryPatch {
    pub fn archive() -> Self {
        Self {
            archived: Some(true),
        }
    }
}

impl GitHubClient {
    /// Permanently delete a repository
    ///
    /// Requires a token with the `delete_repo` scope.
    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
        let path = format!("repos/{}/{}", owner, repo);
        let response = self.request(Method::DELETE, &path).send().await?;
        ensure_success(response, &format!("delete {}/{}", owner, repo)).await?;
        Ok(())
    }

    /// Mark a repository as archived (read-only)
    pub async fn archive_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.update_repository(owner, repo, &RepositoryPatch::archive())
            .await
    }

    /// Apply a partial update to a repository; the response body is ignored
    pub async fn update_repository(
        &self,
        owner: &str,
        repo: &str,
        patch: &RepositoryPatch,
    ) -> Result<()> {
        let path = format!("repos/{}/{}", owner, repo);
        let response = self
            .request(Method::PATCH, &path)
            .json(patch)
            .send()
            .await?;
        ensure_success(response, &format!("update {}/{}", owner, repo)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_patch_body() {
        let body = serde_json::to_value(RepositoryPatch::archive()).unwrap();
        assert_eq!(body, serde_json::json!({ "archived": true }));
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let body = serde_json::to_value(RepositoryPatch::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
