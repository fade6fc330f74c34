//! Repository fetching from GitHub.
//!
//! Two strategies mirror the two configuration modes: flat configurations
//! list the user's repositories once and filter by name, categorized
//! configurations look each repository up individually and skip the ones
//! that can't be found.

mod client;
mod error;
mod record;

pub use client::GitHubSource;
pub use error::FetchError;
pub use record::RepositoryRecord;

use std::collections::HashMap;
use tracing::{debug, info, info_span, warn, Instrument};

/// Read-only access to a user's repositories.
///
/// Implemented by [`GitHubSource`] for live runs. Tests drive the pipeline
/// through in-memory implementations.
#[allow(async_fn_in_trait)]
pub trait RepositorySource {
    /// Lists every repository owned by `user`.
    async fn list_repositories(&self, user: &str) -> Result<Vec<RepositoryRecord>, FetchError>;

    /// Looks up a single repository. Returns `Ok(None)` when it doesn't exist
    /// or isn't visible to the caller.
    async fn get_repository(
        &self,
        user: &str,
        name: &str,
    ) -> Result<Option<RepositoryRecord>, FetchError>;
}

/// Repositories retrieved for a run, plus the configured names that weren't found.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Fetched records in fetch order, each paired with the configuration
    /// key it was requested under. GitHub may answer with a differently
    /// cased or renamed repository, so the key is what the config lookup uses.
    pub records: Vec<(String, RepositoryRecord)>,

    /// Configured names with no matching repository.
    pub missing: Vec<String>,
}

/// Lists the user's repositories and keeps those in `names`, in listing order.
///
/// Names without a matching repository are skipped quietly.
///
/// # Errors
///
/// Returns [`FetchError`] if listing fails.
pub async fn fetch_listed<'a, S: RepositorySource>(
    source: &S,
    user: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<FetchOutcome, FetchError> {
    let span = info_span!("fetch_listed", user);

    async {
        let mut wanted: HashMap<&str, bool> = names.into_iter().map(|name| (name, false)).collect();
        info!(configured = wanted.len(), "Listing repositories");

        let mut records = Vec::new();
        for record in source.list_repositories(user).await? {
            if let Some(seen) = wanted.get_mut(record.name.as_str()) {
                *seen = true;
                records.push((record.name.clone(), record));
            }
        }

        let mut missing: Vec<String> = wanted
            .into_iter()
            .filter(|(_, seen)| !seen)
            .map(|(name, _)| name.to_string())
            .collect();
        missing.sort();

        for name in &missing {
            debug!(repo = %name, "Configured repository not in listing");
        }

        info!(count = records.len(), "Fetch complete");
        Ok(FetchOutcome { records, missing })
    }
    .instrument(span)
    .await
}

/// Looks up each repository in `names`, in order.
///
/// Repositories that don't exist or aren't accessible are reported and skipped.
///
/// # Errors
///
/// Returns [`FetchError`] for any other API failure.
pub async fn fetch_named<'a, S: RepositorySource>(
    source: &S,
    user: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<FetchOutcome, FetchError> {
    let span = info_span!("fetch_named", user);

    async {
        let mut outcome = FetchOutcome::default();

        for name in names {
            match source.get_repository(user, name).await? {
                Some(record) => {
                    if record.name != name {
                        debug!(
                            repo = %name,
                            canonical = %record.name,
                            "Repository resolved under another name"
                        );
                    }
                    debug!(repo = %name, stars = record.stars, "Fetched repository");
                    outcome.records.push((name.to_string(), record));
                }
                None => {
                    warn!(repo = %name, "Repository not found or inaccessible, skipping");
                    outcome.missing.push(name.to_string());
                }
            }
        }

        info!(
            count = outcome.records.len(),
            skipped = outcome.missing.len(),
            "Fetch complete"
        );
        Ok(outcome)
    }
    .instrument(span)
    .await
}
