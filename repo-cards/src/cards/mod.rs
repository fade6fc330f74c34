//! Merging, scoring, ordering and grouping of repositories.
//!
//! This module turns fetched [`RepositoryRecord`]s into the final
//! [`Showcase`] that the renderers and the metadata writer consume.

mod colors;
mod group;
mod info;
mod sort;

pub use colors::{language_color, FALLBACK_COLOR};
pub use group::{group_by_category, CategoryGroup, DEFAULT_CATEGORY};
pub use info::{
    popularity_score, priority_bonus, RepositoryInfo, Scoring, FALLBACK_DESCRIPTION,
    FALLBACK_LANGUAGE,
};
pub use sort::{limit, sort_repositories};

use crate::config::CardsConfig;
use crate::github::RepositoryRecord;
use tracing::debug;

/// The repositories selected for rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Showcase {
    /// A single ordered list.
    Flat(Vec<RepositoryInfo>),
    /// Ordered category groups, each with its own ordered list.
    Categorized(Vec<CategoryGroup>),
}

impl Showcase {
    /// Merges, scores, sorts and truncates `records` according to `config`.
    ///
    /// Each record is paired with the configuration key it was fetched for.
    #[must_use]
    pub fn prepare(records: Vec<(String, RepositoryRecord)>, config: &CardsConfig) -> Self {
        let settings = &config.settings;

        if config.is_categorized() {
            let repositories = merge_all(records, config, Scoring::WithPriorityBonus);
            let mut groups = group_by_category(&config.categories, repositories);
            for group in &mut groups {
                sort_repositories(
                    &mut group.repositories,
                    settings.sort_by,
                    settings.sort_direction,
                );
                limit(&mut group.repositories, settings.max_cards_per_category);
            }
            Self::Categorized(groups)
        } else {
            let mut repositories = merge_all(records, config, Scoring::Basic);
            sort_repositories(&mut repositories, settings.sort_by, settings.sort_direction);
            limit(&mut repositories, settings.max_cards);
            Self::Flat(repositories)
        }
    }

    /// Iterates over every selected repository in render order.
    pub fn repositories(&self) -> Box<dyn Iterator<Item = &RepositoryInfo> + '_> {
        match self {
            Self::Flat(repositories) => Box::new(repositories.iter()),
            Self::Categorized(groups) => {
                Box::new(groups.iter().flat_map(|group| group.repositories.iter()))
            }
        }
    }

    /// Number of selected repositories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repositories().count()
    }

    /// Returns true if nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of stars across all selected repositories.
    #[must_use]
    pub fn total_stars(&self) -> u64 {
        self.repositories().map(|r| u64::from(r.stars)).sum()
    }

    /// Sum of forks across all selected repositories.
    #[must_use]
    pub fn total_forks(&self) -> u64 {
        self.repositories().map(|r| u64::from(r.forks)).sum()
    }
}

fn merge_all(
    records: Vec<(String, RepositoryRecord)>,
    config: &CardsConfig,
    scoring: Scoring,
) -> Vec<RepositoryInfo> {
    records
        .into_iter()
        .filter_map(|(key, record)| {
            let Some(entry) = config.repositories.get(&key) else {
                debug!(repo = %key, "Not in configuration, ignoring");
                return None;
            };
            Some(RepositoryInfo::merge(record, entry, scoring))
        })
        .collect()
}
