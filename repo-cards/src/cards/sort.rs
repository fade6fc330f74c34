//! Ordering and truncation of repository lists.

use super::RepositoryInfo;
use crate::config::{SortBy, SortDirection};
use std::cmp::Ordering;

/// Sorts `repositories` in place.
///
/// The sort is stable in both directions, so entries with equal keys keep
/// their fetch order.
pub fn sort_repositories(repositories: &mut [RepositoryInfo], by: SortBy, direction: SortDirection) {
    repositories.sort_by(|a, b| {
        let ordering = compare(a, b, by);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Truncates to at most `max` entries. `None` and `Some(0)` keep everything.
pub fn limit(repositories: &mut Vec<RepositoryInfo>, max: Option<usize>) {
    if let Some(max) = max.filter(|&max| max > 0) {
        repositories.truncate(max);
    }
}

fn compare(a: &RepositoryInfo, b: &RepositoryInfo, by: SortBy) -> Ordering {
    match by {
        SortBy::Stars => a.stars.cmp(&b.stars),
        SortBy::Priority => a.priority.cmp(&b.priority),
        SortBy::Name => a.name.cmp(&b.name),
        SortBy::Popularity => a.popularity_score.cmp(&b.popularity_score),
    }
}
