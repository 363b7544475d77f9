// GitHub API module.
// Client, endpoints and types for the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use endpoints::MAX_PER_PAGE;
pub use types::*;
