//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories named in the configuration.
    pub repositories_configured: usize,

    /// Number of repositories fetched from GitHub.
    pub repositories_fetched: usize,

    /// Number of repositories kept after sorting and limits.
    pub repositories_selected: usize,

    /// Number of configured repositories that were skipped.
    pub repositories_skipped: usize,

    /// Number of card files written.
    pub cards_written: usize,

    /// Stars across selected repositories.
    pub total_stars: u64,

    /// Forks across selected repositories.
    pub total_forks: u64,

    /// Per-repository outcomes in processing order.
    pub results: Vec<ProcessingResult>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        match &result {
            ProcessingResult::Rendered { .. } => self.cards_written += 1,
            ProcessingResult::Skipped { .. } => self.repositories_skipped += 1,
        }
        self.results.push(result);
    }

    /// Returns the names of skipped repositories.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(|result| match result {
            ProcessingResult::Skipped { repository, .. } => Some(repository.as_str()),
            ProcessingResult::Rendered { .. } => None,
        })
    }
}
