//! Ctrl-C handling
//!
//! The prompts read keys in raw mode and re-raise SIGINT when Ctrl-C is
//! pressed, so a cancelled prompt never comes back as an error. Left alone
//! the signal kills the process with status 130 and a hidden cursor. The
//! handler installed here ends the process the same way a cancelled prompt
//! does instead.

use crate::constants;
use anyhow::{Context, Result};
use console::Term;

/// Put `term` back in a usable state and return the exit status to use
pub fn cancel(term: &Term) -> i32 {
    // Select, MultiSelect and Confirm hide the cursor while they are open
    if let Err(err) = term.show_cursor().and_then(|()| term.write_line("")) {
        tracing::debug!(error = %err, "could not restore terminal");
    }
    tracing::debug!("interrupted by user");
    i32::from(constants::exit::CLEAN)
}

/// Route Ctrl-C through [`cancel`] for the rest of the process
///
/// Prompts render on stderr, so that is the terminal restored.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| std::process::exit(cancel(&Term::stderr())))
        .context("Failed to install Ctrl-C handler")
}
