//! Run-wide rendering settings.
//!
//! Unrecognised option values never fail the load. They fall back to the
//! option's default with a warning.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Field used to order repositories before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Star count.
    #[default]
    Stars,
    /// Configured priority (lower numbers first when ascending).
    Priority,
    /// Repository name.
    Name,
    /// Derived popularity score.
    Popularity,
}

/// Sort direction. Any value other than `desc` sorts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Advisory layout hint. Carried into the metadata snapshot, not interpreted
/// by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

/// Card colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The `settings` block of the configuration file.
///
/// Every field is optional in the file and falls back to the documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort key (default: `stars`).
    #[serde(deserialize_with = "or_default")]
    pub sort_by: SortBy,

    /// Sort direction (default: `desc`).
    pub sort_direction: SortDirection,

    /// Maximum cards in flat mode. `None` means unlimited.
    pub max_cards: Option<usize>,

    /// Maximum cards per category in categorized mode. `None` means unlimited.
    pub max_cards_per_category: Option<usize>,

    /// Whether tags are drawn on cards (default: `true`).
    pub show_tags: bool,

    /// Whether category descriptions are written into the README section (default: `true`).
    pub show_category_descriptions: bool,

    /// Advisory layout hint (default: `grid`).
    #[serde(deserialize_with = "or_default")]
    pub layout: Layout,

    /// Card colour scheme (default: `light`).
    #[serde(deserialize_with = "or_default")]
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_by: SortBy::default(),
            sort_direction: SortDirection::default(),
            max_cards: None,
            max_cards_per_category: None,
            show_tags: true,
            show_category_descriptions: true,
            layout: Layout::default(),
            theme: Theme::default(),
        }
    }
}

impl<'de> Deserialize<'de> for SortDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value.as_str() {
            Some("desc") => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            _ => {
                warn!(%value, "Unrecognised sort_direction, sorting ascending");
                Ok(Self::Asc)
            }
        }
    }
}

/// Deserializes `T`, substituting `T::default()` for values it doesn't recognise.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        warn!(%value, error = %e, "Unrecognised setting, using default");
        T::default()
    }))
}
