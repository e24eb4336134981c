//! gh-sweep - interactively delete or archive your own GitHub repositories in bulk

pub mod config;
pub mod confirmation;
pub mod constants;
pub mod error;
pub mod executor;
pub mod flow;
pub mod github;
pub mod interrupt;
pub mod operation;
pub mod progress;
pub mod prompt;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use config::Config;
pub use error::SweepError;
pub use flow::{AbortReason, FlowSettings, InteractionFlow, Session};
pub use github::RepositoryApi;
pub use operation::{BulkAction, Operation};
