//! GitHub REST client for bulk repository maintenance
//!
//! This library provides the small slice of the GitHub API that bulk
//! repository cleanup needs: resolving the authenticated user, searching the
//! user's repositories, and deleting or archiving a repository.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`users`]: Authenticated user lookup
//! - [`search`]: Repository search
//! - [`repositories`]: Repository deletion and archiving
//! - [`util`]: Response handling shared by the endpoint modules

mod client;
mod repositories;
mod search;
mod users;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, GitHubClient};
pub use repositories::RepositoryPatch;
pub use users::User;
