//! Interactive state machine
//!
//! One iteration walks the user through:
//!
//! ```text
//! ChooseOperation -> FetchRepositories -> SelectRepositories
//!     -> ConfirmText -> ConfirmAction -> Dispatch -> ChooseOperation
//! ```
//!
//! Each step returns a [`Transition`]: carry on, go back to the menu, or end
//! the process. Only [`InteractionFlow::run`] decides when the loop stops.

use crate::config::Config;
use crate::confirmation;
use crate::constants;
use crate::executor::{ActionOutcome, BatchReport, BulkActionExecutor, ItemReport};
use crate::github::{RepositoryApi, RepositoryOption, RepositorySearchClient};
use crate::operation::{BulkAction, Operation};
use crate::progress::Spinner;
use crate::prompt::{ConfirmSpec, InputSpec, MultiSelectSpec, PromptError, Prompter, SelectSpec};
use colored::*;

const NO_REPOSITORIES: &str = "No Repositories Found.";

/// State carried through one iteration of the main loop
///
/// The login is fixed for the whole process; everything else is cleared at
/// the top of each iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    login: String,
    operation: Option<Operation>,
    candidates: Vec<RepositoryOption>,
    selection: Vec<String>,
    confirmation_text: String,
}

impl Session {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }

    /// Forget everything but the login
    pub fn reset(&mut self) {
        self.operation = None;
        self.candidates.clear();
        self.selection.clear();
        self.confirmation_text.clear();
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn candidates(&self) -> &[RepositoryOption] {
        &self.candidates
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn confirmation_text(&self) -> &str {
        &self.confirmation_text
    }
}

/// What happens after a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    /// Move on to the next step with a value
    Continue(T),
    /// Abandon this iteration and show the menu again
    ReturnToMenu,
    /// End the process
    FatalAbort(AbortReason),
}

/// Why the process is ending; both are clean exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// "Exit" was chosen in the menu
    ExitRequested,
    /// A prompt was cancelled
    Cancelled,
}

impl AbortReason {
    /// Process exit status for this ending
    pub fn exit_code(self) -> u8 {
        match self {
            AbortReason::ExitRequested | AbortReason::Cancelled => constants::exit::CLEAN,
        }
    }
}

/// Unwrap a `Transition::Continue`, returning any other transition early
macro_rules! proceed {
    ($step:expr) => {
        match $step {
            Transition::Continue(value) => value,
            Transition::ReturnToMenu => return Transition::ReturnToMenu,
            Transition::FatalAbort(reason) => return Transition::FatalAbort(reason),
        }
    };
}

fn prompted<T>(result: Result<T, PromptError>) -> Transition<T> {
    match result {
        Ok(value) => Transition::Continue(value),
        Err(PromptError::Aborted) => Transition::FatalAbort(AbortReason::Cancelled),
    }
}

/// Tunables for the flow, usually taken from [`Config`]
///
/// The confirmation token length and the multi-select height are fixed by
/// [`constants::prompt`] and cannot be changed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub per_page: u32,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            per_page: constants::github::SEARCH_PAGE_SIZE,
        }
    }
}

impl From<&Config> for FlowSettings {
    fn from(config: &Config) -> Self {
        Self {
            per_page: config.github.per_page,
        }
    }
}

/// Title of the yes/no gate, e.g. "❌ 2 repos will be deleted. Want to proceed? ❌"
pub fn confirm_title(action: BulkAction, count: usize) -> String {
    let noun = if count > 1 { "repos" } else { "repo" };
    format!(
        "❌ {} {} will be {}. Want to proceed? ❌",
        count,
        noun,
        action.past_tense()
    )
}

fn format_item(action: BulkAction, item: &ItemReport) -> String {
    match &item.outcome {
        ActionOutcome::Succeeded => format!(
            "{} {}",
            action.report_label().green(),
            item.repository.cyan().bold()
        ),
        ActionOutcome::Failed(reason) => format!("Error: {reason}").red().to_string(),
    }
}

fn print_summary(action: BulkAction, batch: &BatchReport) {
    if batch.is_complete() {
        println!(
            "{}",
            format!("Done: {} {}", batch.succeeded(), action.past_tense()).green()
        );
    } else {
        println!(
            "{}",
            format!(
                "Stopped after a failure: {} {}, {} failed, {} skipped",
                batch.succeeded(),
                action.past_tense(),
                batch.failed(),
                batch.skipped()
            )
            .yellow()
        );
    }
}

/// Drives the prompts, the search and the bulk action
pub struct InteractionFlow<'a, P: Prompter + ?Sized, A: RepositoryApi + ?Sized> {
    prompter: &'a mut P,
    api: &'a A,
    settings: FlowSettings,
}

impl<'a, P: Prompter + ?Sized, A: RepositoryApi + ?Sized> InteractionFlow<'a, P, A> {
    pub fn new(prompter: &'a mut P, api: &'a A, settings: FlowSettings) -> Self {
        Self {
            prompter,
            api,
            settings,
        }
    }

    /// Loop until the user exits or cancels a prompt
    pub async fn run(&mut self, session: &mut Session) -> AbortReason {
        loop {
            session.reset();
            match self.run_iteration(session).await {
                Transition::FatalAbort(reason) => {
                    tracing::debug!(?reason, "leaving interactive loop");
                    return reason;
                }
                Transition::Continue(()) | Transition::ReturnToMenu => {}
            }
        }
    }

    /// One pass from the menu to dispatch
    pub async fn run_iteration(&mut self, session: &mut Session) -> Transition<()> {
        let action = proceed!(self.choose_operation(session));
        proceed!(self.fetch_repositories(session).await);
        proceed!(self.select_repositories(session));
        proceed!(self.confirm_text(session));
        proceed!(self.confirm_action(session, action));
        self.dispatch(session, action).await
    }

    fn choose_operation(&mut self, session: &mut Session) -> Transition<BulkAction> {
        let labels: Vec<&str> = Operation::ALL.iter().map(|op| op.menu_label()).collect();
        let index = proceed!(prompted(self.prompter.select(&SelectSpec {
            title: "Choose operation",
            items: &labels,
        })));

        let Some(operation) = Operation::ALL.get(index).copied() else {
            return Transition::ReturnToMenu;
        };
        session.operation = Some(operation);

        match operation.bulk_action() {
            Some(action) => Transition::Continue(action),
            None => Transition::FatalAbort(AbortReason::ExitRequested),
        }
    }

    async fn fetch_repositories(&mut self, session: &mut Session) -> Transition<()> {
        let hint = format!(
            "Empty query will return {} repositories",
            self.settings.per_page
        );
        let query = proceed!(prompted(self.prompter.input(&InputSpec {
            title: "Search",
            hint: Some(&hint),
            validator: None,
        })));

        println!("{}", "Fetching repositories...".green());

        let search = RepositorySearchClient::new(self.api, self.settings.per_page);
        match search.search(&query, &session.login).await {
            Ok(options) if options.is_empty() => {
                println!("{}", NO_REPOSITORIES.yellow());
                Transition::ReturnToMenu
            }
            Ok(options) => {
                session.candidates = options;
                Transition::Continue(())
            }
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                Transition::ReturnToMenu
            }
        }
    }

    fn select_repositories(&mut self, session: &mut Session) -> Transition<()> {
        let mut indices = proceed!(prompted(self.prompter.multi_select(&MultiSelectSpec {
            title: "Select Repositories to Process",
            options: &session.candidates,
            height: constants::prompt::PAGE_HEIGHT,
        })));
        indices.sort_unstable();
        indices.dedup();

        let selection: Vec<String> = indices
            .into_iter()
            .filter_map(|index| session.candidates.get(index))
            .map(|option| option.value.clone())
            .collect();

        if selection.is_empty() {
            println!("{}", NO_REPOSITORIES.yellow());
            return Transition::ReturnToMenu;
        }

        println!("Selected Repositories:");
        for repository in &selection {
            println!("{}", repository.cyan());
        }

        session.selection = selection;
        Transition::Continue(())
    }

    fn confirm_text(&mut self, session: &mut Session) -> Transition<()> {
        let token = confirmation::generate(constants::prompt::CONFIRMATION_LENGTH);
        let validate = |typed: &str| confirmation::validate_confirmation(&token, typed);
        let spec = InputSpec {
            title: "Confirm the text?",
            hint: Some(&token),
            validator: Some(&validate),
        };

        loop {
            let typed = proceed!(prompted(self.prompter.input(&spec)));
            match spec.check(&typed) {
                Ok(()) => {
                    session.confirmation_text = typed;
                    return Transition::Continue(());
                }
                Err(err) => eprintln!("{}", err.to_string().red()),
            }
        }
    }

    fn confirm_action(&mut self, session: &Session, action: BulkAction) -> Transition<()> {
        let title = confirm_title(action, session.selection.len());
        let confirmed = proceed!(prompted(self.prompter.confirm(&ConfirmSpec {
            title: &title,
            default: false,
        })));

        if confirmed {
            Transition::Continue(())
        } else {
            println!("{}", "Nothing was changed.".yellow());
            Transition::ReturnToMenu
        }
    }

    async fn dispatch(&mut self, session: &Session, action: BulkAction) -> Transition<()> {
        if session.selection.is_empty() {
            return Transition::ReturnToMenu;
        }

        let spinner = Spinner::start(format!("{} repositories...", action.in_progress()));
        let batch = BulkActionExecutor::new(self.api)
            .apply(action, &session.selection, &session.login, |item| {
                spinner.println(format_item(action, item))
            })
            .await;
        spinner.finish();

        print_summary(action, &batch);
        Transition::Continue(())
    }
}
