//! Per-repository configuration entries.

use serde::{Deserialize, Serialize};

/// Priority assigned to repositories that don't declare one.
pub const DEFAULT_PRIORITY: u32 = 999;

/// Configuration for a single showcased repository, keyed by repository name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Category the repository is listed under (categorized mode only).
    pub category: Option<String>,

    /// Replaces the remote description when set and non-empty.
    pub description_override: Option<String>,

    /// Explicit ordering priority (default: 999).
    pub priority: u32,

    /// Tags drawn on the card.
    pub tags: Vec<String>,

    /// Whether the repository is intentionally featured (default: `true`).
    pub showcase: bool,

    /// Replaces the language colour when set.
    pub custom_color: Option<String>,

    /// Raster image embedded below the card body.
    pub image_url: Option<String>,

    /// Release stage label (e.g. "beta").
    pub dev_state: Option<String>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            category: None,
            description_override: None,
            priority: DEFAULT_PRIORITY,
            tags: Vec::new(),
            showcase: true,
            custom_color: None,
            image_url: None,
            dev_state: None,
        }
    }
}

/// Configuration for a category of repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Text written under the category heading.
    pub description: Option<String>,

    /// Accent colour applied to cards in this category.
    pub color: Option<String>,

    /// Emoji or short text shown before the category heading.
    pub icon: Option<String>,

    /// Category ordering; lower values are listed first (default: 999).
    pub priority: u32,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            description: None,
            color: None,
            icon: None,
            priority: DEFAULT_PRIORITY,
        }
    }
}
