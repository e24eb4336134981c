//! Prompt abstraction used by the interaction flow
//!
//! A prompt is described by a spec; a [`Prompter`] renders it and returns the
//! user's answer or [`PromptError::Aborted`]. Validation rules live on the
//! spec as plain functions, so the flow and its rules can be exercised
//! without a terminal.

pub mod terminal;

use crate::error::ValidationError;
use crate::github::RepositoryOption;
use thiserror::Error;

pub use terminal::TerminalPrompter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The user cancelled the prompt
    #[error("prompt cancelled")]
    Aborted,
}

/// Validation rule applied to free-text input
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), ValidationError>;

/// Single choice from a list of labels
pub struct SelectSpec<'a> {
    pub title: &'a str,
    pub items: &'a [&'a str],
}

/// Free-text input
pub struct InputSpec<'a> {
    pub title: &'a str,
    /// Extra line shown with the prompt
    pub hint: Option<&'a str>,
    pub validator: Option<Validator<'a>>,
}

impl InputSpec<'_> {
    /// Apply the spec's validation rule to `value`
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self.validator {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

/// Any number of choices from a list of repositories
pub struct MultiSelectSpec<'a> {
    pub title: &'a str,
    pub options: &'a [RepositoryOption],
    /// Rows visible at once; longer lists scroll
    pub height: usize,
}

/// Yes/no question
pub struct ConfirmSpec<'a> {
    pub title: &'a str,
    pub default: bool,
}

/// Renders prompts and collects answers
pub trait Prompter {
    /// Index of the chosen item
    fn select(&mut self, spec: &SelectSpec<'_>) -> Result<usize, PromptError>;

    /// Entered text; implementations may re-prompt until `spec.check` passes
    fn input(&mut self, spec: &InputSpec<'_>) -> Result<String, PromptError>;

    /// Indices of the chosen options, in list order
    fn multi_select(&mut self, spec: &MultiSelectSpec<'_>) -> Result<Vec<usize>, PromptError>;

    fn confirm(&mut self, spec: &ConfirmSpec<'_>) -> Result<bool, PromptError>;
}
