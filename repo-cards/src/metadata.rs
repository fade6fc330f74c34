//! JSON metadata snapshot of a run.

use crate::cards::{CategoryGroup, RepositoryInfo, Showcase};
use crate::config::Layout;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// File name of the snapshot inside the output directory.
pub const METADATA_FILE: &str = "metadata.json";

/// Errors that can occur while writing the snapshot.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Failed to write the file.
    #[error("Failed to write metadata '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the snapshot.
    #[error("Failed to serialize metadata: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Summary of everything rendered in a run.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataSnapshot<'a> {
    pub last_updated: DateTime<Utc>,
    pub total_repositories: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub layout: Layout,
    #[serde(flatten)]
    pub content: SnapshotContent<'a>,
}

/// Repositories, as a flat list or grouped by category.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SnapshotContent<'a> {
    Flat {
        repositories: &'a [RepositoryInfo],
    },
    Categorized {
        categories: IndexMap<&'a str, CategorySnapshot<'a>>,
    },
}

/// One category with totals computed from its own repositories.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySnapshot<'a> {
    pub description: Option<&'a str>,
    pub color: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub total_repositories: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub repositories: &'a [RepositoryInfo],
}

impl<'a> CategorySnapshot<'a> {
    fn from_group(group: &'a CategoryGroup) -> Self {
        Self {
            description: group.config.description.as_deref(),
            color: group.config.color.as_deref(),
            icon: group.config.icon.as_deref(),
            total_repositories: group.repositories.len(),
            total_stars: group.total_stars(),
            total_forks: group.total_forks(),
            repositories: &group.repositories,
        }
    }
}

impl<'a> MetadataSnapshot<'a> {
    /// Builds a snapshot of `showcase` stamped with `last_updated`.
    #[must_use]
    pub fn new(showcase: &'a Showcase, layout: Layout, last_updated: DateTime<Utc>) -> Self {
        let content = match showcase {
            Showcase::Flat(repositories) => SnapshotContent::Flat { repositories },
            Showcase::Categorized(groups) => SnapshotContent::Categorized {
                categories: groups
                    .iter()
                    .map(|group| (group.name.as_str(), CategorySnapshot::from_group(group)))
                    .collect(),
            },
        };

        Self {
            last_updated,
            total_repositories: showcase.len(),
            total_stars: showcase.total_stars(),
            total_forks: showcase.total_forks(),
            layout,
            content,
        }
    }

    /// Writes the snapshot as pretty-printed JSON, replacing any previous file.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if serialization or the write fails.
    pub fn write(&self, path: &Path) -> Result<(), MetadataError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| MetadataError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(
            path = %path.display(),
            repositories = self.total_repositories,
            "Wrote metadata"
        );
        Ok(())
    }
}
