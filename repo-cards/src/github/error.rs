//! Repository fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching repositories.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
