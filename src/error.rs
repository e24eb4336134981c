//! Error taxonomy for the interactive flow
//!
//! Setup and capability failures end the process; validation, request and
//! mutation failures are reported and the flow carries on. User cancellation
//! is not an error and is modelled by [`crate::prompt::PromptError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// API client construction, configuration or auth-status invocation failed
    #[error("{0:#}")]
    Setup(anyhow::Error),

    /// The token lacks the scope destructive operations need
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// Typed confirmation did not match
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository search failed
    #[error("Error fetching repositories: {0:#}")]
    Request(anyhow::Error),

    /// Deleting or archiving a single repository failed
    #[error("{repository}: {cause:#}")]
    Mutation {
        repository: String,
        cause: anyhow::Error,
    },
}

/// Why the token cannot be used for destructive operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("No Token scopes found in the output.")]
    NoScopes,
    #[error("You don't have '{0}' scope in your gh token.")]
    MissingScope(String),
}

impl CapabilityError {
    /// Lines shown to the user, including how to fix the token
    pub fn remediation(&self) -> Vec<String> {
        match self {
            CapabilityError::NoScopes => vec![self.to_string()],
            CapabilityError::MissingScope(scope) => vec![
                self.to_string(),
                format!(
                    "Refresh your token by running `gh auth refresh -s {}` in your cli.",
                    scope
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_scope_remediation() {
        let lines = CapabilityError::MissingScope("delete_repo".to_string()).remediation();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "You don't have 'delete_repo' scope in your gh token.");
        assert!(lines[1].contains("gh auth refresh -s delete_repo"));
    }

    #[test]
    fn test_no_scopes_remediation() {
        let lines = CapabilityError::NoScopes.remediation();
        assert_eq!(lines, vec!["No Token scopes found in the output.".to_string()]);
    }

    #[test]
    fn test_mutation_display_names_repository() {
        let err = SweepError::Mutation {
            repository: "old-repo".to_string(),
            cause: anyhow::anyhow!("Failed to delete octocat/old-repo (403 Forbidden)"),
        };
        assert_eq!(
            err.to_string(),
            "old-repo: Failed to delete octocat/old-repo (403 Forbidden)"
        );
    }
}
