use anyhow::Result;
use clap::Parser;
use colored::*;
use gh_sweep::github::{TokenCapabilityChecker, auth};
use gh_sweep::prompt::TerminalPrompter;
use gh_sweep::{
    AbortReason, Config, FlowSettings, InteractionFlow, RepositoryApi, Session, SweepError,
    constants, interrupt,
};
use std::process::ExitCode;
use sweep_github::GitHubClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gh-sweep")]
#[command(about = "Interactively delete or archive your GitHub repositories in bulk")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let _cli = Cli::parse();
    init_tracing();
    interrupt::install_handler().map_err(SweepError::Setup)?;

    let config = Config::load().map_err(SweepError::Setup)?;

    // Missing scope is reported with instructions, not as a failure
    let checker =
        TokenCapabilityChecker::new(&config.github.gh_binary, constants::github::REQUIRED_SCOPE);
    match checker.check() {
        Ok(()) => {}
        Err(SweepError::Capability(err)) => {
            for line in err.remediation() {
                println!("{}", line.yellow());
            }
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.into()),
    }

    let token = auth::resolve_token(&config.github.gh_binary, |key| std::env::var(key).ok())
        .map_err(SweepError::Setup)?;
    let client = GitHubClient::new(token, constants::github::DEFAULT_USER_AGENT)
        .map_err(SweepError::Setup)?
        .with_base_url(&config.github.api_base);

    let user = client.current_user().await.map_err(SweepError::Setup)?;
    tracing::debug!(login = %user.login, "authenticated");

    let mut prompter = TerminalPrompter::new();
    let mut session = Session::new(user.login);
    let mut flow = InteractionFlow::new(&mut prompter, &client, FlowSettings::from(&config));

    let reason = flow.run(&mut session).await;
    if reason == AbortReason::Cancelled {
        tracing::debug!("cancelled by user");
    }

    Ok(ExitCode::from(reason.exit_code()))
}

/// Diagnostics go to stderr and stay silent unless `GH_SWEEP_LOG` is set
fn init_tracing() {
    let filter = EnvFilter::try_from_env(constants::env::LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
