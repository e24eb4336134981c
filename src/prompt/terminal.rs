//! Terminal prompts rendered with dialoguer

use super::{ConfirmSpec, InputSpec, MultiSelectSpec, PromptError, Prompter, SelectSpec};
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Interactive prompter for a real terminal
///
/// Escape, `q` and terminal errors count as the user aborting. Ctrl-C never
/// reaches these prompts: it raises SIGINT, which
/// [`crate::interrupt::install_handler`] turns into a clean exit.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bold when the answer is checked against the hint, dimmed otherwise
fn styled_hint(spec: &InputSpec<'_>, hint: &str) -> ColoredString {
    if spec.validator.is_some() {
        hint.bold()
    } else {
        hint.dimmed()
    }
}

fn aborted(err: dialoguer::Error) -> PromptError {
    tracing::debug!(error = %err, "prompt interrupted");
    PromptError::Aborted
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, spec: &SelectSpec<'_>) -> Result<usize, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(spec.title)
            .items(spec.items)
            .default(0)
            .interact_opt()
            .map_err(aborted)?
            .ok_or(PromptError::Aborted)
    }

    fn input(&mut self, spec: &InputSpec<'_>) -> Result<String, PromptError> {
        if let Some(hint) = spec.hint {
            println!("{}", styled_hint(spec, hint));
        }

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(spec.title)
            .allow_empty(true);
        if spec.validator.is_some() {
            input = input.validate_with(|value: &String| spec.check(value));
        }

        input.interact_text().map_err(aborted)
    }

    fn multi_select(&mut self, spec: &MultiSelectSpec<'_>) -> Result<Vec<usize>, PromptError> {
        let labels: Vec<&str> = spec.options.iter().map(|o| o.label.as_str()).collect();

        MultiSelect::with_theme(&self.theme)
            .with_prompt(spec.title)
            .items(&labels)
            .max_length(spec.height)
            .interact_opt()
            .map_err(aborted)?
            .ok_or(PromptError::Aborted)
    }

    fn confirm(&mut self, spec: &ConfirmSpec<'_>) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(spec.title)
            .default(spec.default)
            .interact_opt()
            .map_err(aborted)?
            .ok_or(PromptError::Aborted)
    }
}
