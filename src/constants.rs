//! Central constants for the gh-sweep application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = sweep_github::DEFAULT_API_BASE;

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gh-sweep/", env!("CARGO_PKG_VERSION"));

    /// Number of repositories requested from the search API
    pub const SEARCH_PAGE_SIZE: u32 = 100;

    /// Token scope required before any destructive operation is offered
    pub const REQUIRED_SCOPE: &str = "delete_repo";

    /// Name of the GitHub CLI executable used for auth status and token lookup
    pub const GH_BINARY: &str = "gh";
}

/// Default values for interactive prompts
pub mod prompt {
    /// Number of characters in a typed-confirmation token
    pub const CONFIRMATION_LENGTH: usize = 8;

    /// Visible rows in the repository multi-select
    pub const PAGE_HEIGHT: usize = 8;
}

/// Process exit codes
pub mod exit {
    /// "Exit" chosen from the menu, or a prompt cancelled with Esc or Ctrl-C
    pub const CLEAN: u8 = 0;
}

/// Environment variables read at startup
pub mod env {
    /// Path to an optional YAML configuration file
    pub const CONFIG_PATH: &str = "GH_SWEEP_CONFIG";

    /// Overrides the GitHub API base URL
    pub const API_URL: &str = "GITHUB_API_URL";

    /// Token variables, in lookup order
    pub const TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

    /// `tracing` filter directives
    pub const LOG_FILTER: &str = "GH_SWEEP_LOG";
}
