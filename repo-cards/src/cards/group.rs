//! Category grouping for categorized configurations.

use super::RepositoryInfo;
use crate::config::CategoryConfig;
use indexmap::IndexMap;

/// Category assigned to repositories that don't name one.
pub const DEFAULT_CATEGORY: &str = "other";

/// Repositories listed under one category heading.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// Category name as written in the configuration.
    pub name: String,

    /// Category settings; defaults for undeclared categories.
    pub config: CategoryConfig,

    /// Repositories in this category.
    pub repositories: Vec<RepositoryInfo>,
}

impl CategoryGroup {
    /// Sum of stars across this category's repositories.
    #[must_use]
    pub fn total_stars(&self) -> u64 {
        self.repositories.iter().map(|r| u64::from(r.stars)).sum()
    }

    /// Sum of forks across this category's repositories.
    #[must_use]
    pub fn total_forks(&self) -> u64 {
        self.repositories.iter().map(|r| u64::from(r.forks)).sum()
    }
}

/// Groups repositories by category.
///
/// Declared categories come first, ordered by ascending priority and then by
/// declaration order. Undeclared categories follow in first-seen order.
/// Categories without repositories are dropped. Each repository receives its
/// category's colour as accent.
#[must_use]
pub fn group_by_category(
    categories: &IndexMap<String, CategoryConfig>,
    repositories: Vec<RepositoryInfo>,
) -> Vec<CategoryGroup> {
    let mut declared: Vec<(&String, &CategoryConfig)> = categories.iter().collect();
    declared.sort_by_key(|(_, config)| config.priority);

    let mut groups: IndexMap<String, CategoryGroup> = declared
        .into_iter()
        .map(|(name, config)| {
            (
                name.clone(),
                CategoryGroup {
                    name: name.clone(),
                    config: config.clone(),
                    repositories: Vec::new(),
                },
            )
        })
        .collect();

    for mut repository in repositories {
        let name = repository
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let group = groups
            .entry(name.clone())
            .or_insert_with(|| CategoryGroup {
                name,
                config: CategoryConfig::default(),
                repositories: Vec::new(),
            });

        repository.accent_color = group.config.color.clone();
        group.repositories.push(repository);
    }

    groups
        .into_values()
        .filter(|group| !group.repositories.is_empty())
        .collect()
}
