//! Data structures shared between search and prompts

/// A repository the user can pick in the multi-select
///
/// Both fields hold the repository's short name; the label is what the prompt
/// shows and the value is what the executor acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOption {
    pub label: String,
    pub value: String,
}

impl RepositoryOption {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: name,
        }
    }
}
