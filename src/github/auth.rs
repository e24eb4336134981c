//! Token capability check and token resolution via the GitHub CLI
//!
//! The credential comes from the user's existing `gh` login. Before any
//! destructive operation is offered, `gh auth status` must report the scope
//! that repository deletion needs.

use crate::constants;
use crate::error::{CapabilityError, SweepError};
use anyhow::{Context, Result, bail};
use std::process::Command;

/// Marker of the status line listing the token's scopes
const SCOPES_MARKER: &str = "Token scopes";

/// Verifies that the `gh` credential carries a required scope
pub struct TokenCapabilityChecker {
    gh_binary: String,
    required_scope: String,
}

impl TokenCapabilityChecker {
    pub fn new(gh_binary: impl Into<String>, required_scope: impl Into<String>) -> Self {
        Self {
            gh_binary: gh_binary.into(),
            required_scope: required_scope.into(),
        }
    }

    /// Run `gh auth status` and inspect the reported scopes
    ///
    /// # Errors
    /// - [`SweepError::Setup`] if the status command cannot be run or fails
    /// - [`SweepError::Capability`] if no scope line is found or the required
    ///   scope is absent
    pub fn check(&self) -> Result<(), SweepError> {
        let status = self.auth_status().map_err(SweepError::Setup)?;
        evaluate_scopes(&status, &self.required_scope)?;
        tracing::debug!(scope = %self.required_scope, "token scope present");
        Ok(())
    }

    /// Combined stdout and stderr of `gh auth status`
    ///
    /// Older `gh` releases print the status to stderr, newer ones to stdout.
    fn auth_status(&self) -> Result<String> {
        let output = Command::new(&self.gh_binary)
            .args(["auth", "status"])
            .output()
            .with_context(|| format!("Failed to run `{} auth status`", self.gh_binary))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            bail!(
                "`{} auth status` exited with {}: {}",
                self.gh_binary,
                output.status,
                text.trim()
            );
        }

        Ok(text)
    }
}

/// Check `status` text for a scope line containing `required_scope`
pub fn evaluate_scopes(status: &str, required_scope: &str) -> Result<(), CapabilityError> {
    let scopes_line = status
        .lines()
        .find(|line| line.contains(SCOPES_MARKER))
        .ok_or(CapabilityError::NoScopes)?;

    if scopes_line.contains(required_scope) {
        Ok(())
    } else {
        Err(CapabilityError::MissingScope(required_scope.to_string()))
    }
}

/// Resolve the API token: environment first, then `gh auth token`
pub fn resolve_token<F>(gh_binary: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = token_from_env(lookup) {
        tracing::debug!("using token from environment");
        return Ok(token);
    }
    gh_auth_token(gh_binary)
}

/// First non-empty token variable, in [`constants::env::TOKEN_VARS`] order
pub fn token_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    constants::env::TOKEN_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

fn gh_auth_token(gh_binary: &str) -> Result<String> {
    let output = Command::new(gh_binary)
        .args(["auth", "token"])
        .output()
        .with_context(|| format!("Failed to run `{} auth token`", gh_binary))?;

    if !output.status.success() {
        bail!(
            "`{} auth token` exited with {}: {}",
            gh_binary,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        bail!("`{} auth token` returned no token; run `gh auth login`", gh_binary);
    }
    Ok(token)
}
