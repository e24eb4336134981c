//! Bulk delete/archive execution
//!
//! Repositories are processed one request at a time, in selection order.
//! The first failure stops the batch: whatever already succeeded stays done
//! and the remaining repositories are left untouched.

use crate::error::SweepError;
use crate::github::RepositoryApi;
use crate::operation::BulkAction;

/// Result of applying an action to one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Succeeded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub repository: String,
    pub outcome: ActionOutcome,
}

/// Everything a batch attempted, plus how many repositories it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
    pub total: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    /// Repositories never attempted because an earlier one failed
    pub fn skipped(&self) -> usize {
        self.total - self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed() == 0 && self.skipped() == 0
    }
}

/// Applies a [`BulkAction`] to a list of repositories owned by one user
pub struct BulkActionExecutor<'a, A: RepositoryApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: RepositoryApi + ?Sized> BulkActionExecutor<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Apply `action` to each of `repositories` under `owner`
    ///
    /// `on_item` is called as soon as each repository finishes, so progress can
    /// be shown live. Processing stops after the first failure.
    pub async fn apply<F>(
        &self,
        action: BulkAction,
        repositories: &[String],
        owner: &str,
        mut on_item: F,
    ) -> BatchReport
    where
        F: FnMut(&ItemReport),
    {
        let mut items = Vec::with_capacity(repositories.len());

        for repository in repositories {
            let result = match action {
                BulkAction::Delete => self.api.delete_repository(owner, repository).await,
                BulkAction::Archive => self.api.archive_repository(owner, repository).await,
            };

            let outcome = match result {
                Ok(()) => ActionOutcome::Succeeded,
                Err(cause) => {
                    let err = SweepError::Mutation {
                        repository: repository.clone(),
                        cause,
                    };
                    tracing::warn!(error = %err, "stopping batch after failure");
                    ActionOutcome::Failed(err.to_string())
                }
            };

            let report = ItemReport {
                repository: repository.clone(),
                outcome,
            };
            on_item(&report);

            let stop = !report.outcome.is_success();
            items.push(report);
            if stop {
                break;
            }
        }

        BatchReport {
            items,
            total: repositories.len(),
        }
    }
}
