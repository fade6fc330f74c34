//! Card configuration loading.
//!
//! This module handles reading `repo_config.json`, writing a default skeleton
//! when the file is missing, and exposing typed settings with defaults.

mod error;
mod repository;
mod settings;

pub use error::ConfigError;
pub use repository::{CategoryConfig, RepositoryConfig, DEFAULT_PRIORITY};
pub use settings::{Layout, Settings, SortBy, SortDirection, Theme};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// The complete content configuration for a run.
///
/// Map order follows the file, which decides fetch order and tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Category definitions. A non-empty map switches the run to categorized mode.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub categories: IndexMap<String, CategoryConfig>,

    /// Repositories to showcase, keyed by name.
    pub repositories: IndexMap<String, RepositoryConfig>,

    /// Rendering settings.
    pub settings: Settings,
}

impl CardsConfig {
    /// Returns true when repositories are grouped by category.
    #[must_use]
    pub fn is_categorized(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Builds the skeleton written when no configuration file exists.
    #[must_use]
    pub fn skeleton() -> Self {
        let mut repositories = IndexMap::new();
        repositories.insert(
            "awesome-project".to_string(),
            RepositoryConfig {
                priority: 1,
                tags: vec!["featured".to_string(), "production".to_string()],
                ..RepositoryConfig::default()
            },
        );
        repositories.insert(
            "cool-library".to_string(),
            RepositoryConfig {
                priority: 2,
                tags: vec!["library".to_string()],
                ..RepositoryConfig::default()
            },
        );

        Self {
            categories: IndexMap::new(),
            repositories,
            settings: Settings {
                max_cards: Some(10),
                ..Settings::default()
            },
        }
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::JsonError`] if the content is malformed.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::JsonError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Loads the configuration at `path`, writing and returning the skeleton if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is malformed, or the
    /// skeleton cannot be written.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::parse(&content, path)?;
                debug!(
                    path = %path.display(),
                    repositories = config.repositories.len(),
                    categories = config.categories.len(),
                    "Loaded configuration"
                );
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Configuration not found, writing default");
                let config = Self::skeleton();
                config.write(path)?;
                Ok(config)
            }
            Err(e) => Err(ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    /// Writes the configuration as pretty-printed JSON.
    fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_or_init_writes_skeleton() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo_config.json");

        let config = CardsConfig::load_or_init(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, CardsConfig::skeleton());
        assert!(!config.is_categorized());

        // The written file round-trips to the same configuration.
        let reloaded = CardsConfig::load_or_init(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn load_existing_preserves_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo_config.json");
        fs::write(
            &path,
            r#"{
                "repositories": {
                    "zeta": { "priority": 5 },
                    "alpha": {},
                    "mid": { "showcase": false }
                }
            }"#,
        )
        .unwrap();

        let config = CardsConfig::load_or_init(&path).unwrap();
        let names: Vec<&str> = config.repositories.keys().map(String::as_str).collect();

        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(config.settings, Settings::default());
        assert!(!config.repositories["mid"].showcase);
    }

    #[test]
    fn categories_enable_categorized_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo_config.json");
        fs::write(
            &path,
            r#"{
                "categories": { "Tools": { "priority": 1 } },
                "repositories": { "cli": { "category": "Tools" } }
            }"#,
        )
        .unwrap();

        let config = CardsConfig::load_or_init(&path).unwrap();
        assert!(config.is_categorized());
        assert_eq!(config.categories["Tools"].priority, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo_config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = CardsConfig::load_or_init(&path);
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn unrecognised_settings_do_not_abort_parsing() {
        let config = CardsConfig::parse(
            r#"{
                "repositories": { "cli": {} },
                "settings": { "sort_by": "forks", "sort_direction": "DESC", "layout": "carousel" }
            }"#,
            Path::new("repo_config.json"),
        )
        .unwrap();

        assert_eq!(config.settings.sort_by, SortBy::Stars);
        assert_eq!(config.settings.sort_direction, SortDirection::Asc);
        assert_eq!(config.settings.layout, Layout::Grid);
    }
}
