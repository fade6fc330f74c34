//! octocrab-backed repository source.

use super::{FetchError, RepositoryRecord, RepositorySource};
use octocrab::models::Repository;
use octocrab::{Octocrab, Page};
use tracing::debug;

/// Results per page when listing a user's repositories.
const RESULTS_PER_PAGE: &str = "100";

/// Fetches repositories from the GitHub REST API.
#[derive(Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
}

impl GitHubSource {
    /// Creates a source authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

impl RepositorySource for GitHubSource {
    async fn list_repositories(&self, user: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        let route = format!("/users/{user}/repos");
        let first: Page<Repository> = self
            .octocrab
            .get(route, Some(&[("per_page", RESULTS_PER_PAGE), ("type", "owner")]))
            .await?;

        let repositories = self.octocrab.all_pages(first).await?;
        debug!(user, count = repositories.len(), "Listed repositories");

        Ok(repositories.into_iter().map(RepositoryRecord::from).collect())
    }

    async fn get_repository(
        &self,
        user: &str,
        name: &str,
    ) -> Result<Option<RepositoryRecord>, FetchError> {
        match self.octocrab.repos(user, name).get().await {
            Ok(repo) => Ok(Some(repo.into())),
            Err(e) if is_inaccessible(&e) => {
                debug!(user, name, error = %e, "Repository not accessible");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Returns true for responses meaning the repository doesn't exist for this
/// token, as opposed to auth, network or rate-limit failures.
fn is_inaccessible(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            matches!(source.status_code.as_u16(), 404 | 451)
        }
        _ => false,
    }
}
