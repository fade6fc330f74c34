//! Merged repository information and popularity scoring.

use super::colors::language_color;
use crate::config::RepositoryConfig;
use crate::github::RepositoryRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Description used when neither config nor GitHub provide one.
pub const FALLBACK_DESCRIPTION: &str = "No description available";

/// Language label used when GitHub reports none.
pub const FALLBACK_LANGUAGE: &str = "None";

/// Score added to showcased repositories.
const SHOWCASE_BONUS: u64 = 1000;

/// Priorities at or above this value earn no priority bonus.
const PRIORITY_BONUS_CEILING: u32 = 100;

/// Score per priority step below [`PRIORITY_BONUS_CEILING`].
const PRIORITY_BONUS_STEP: u64 = 10;

/// How the popularity score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// `stars*2 + forks*3 + showcase bonus`.
    Basic,
    /// [`Scoring::Basic`] plus a bonus for low (high-priority) priority values.
    WithPriorityBonus,
}

/// A repository ready for rendering: remote fields combined with config overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub language: String,
    pub language_color: String,
    pub stars: u32,
    pub forks: u32,
    pub priority: u32,
    pub tags: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub size: u32,
    pub showcase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Category colour, applied as an accent bar on the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    pub popularity_score: u64,
}

impl RepositoryInfo {
    /// Merges a fetched record with its configuration entry.
    ///
    /// Config wins for description and colour; GitHub wins for counts and timestamps.
    #[must_use]
    pub fn merge(record: RepositoryRecord, entry: &RepositoryConfig, scoring: Scoring) -> Self {
        let description = non_empty(entry.description_override.as_deref())
            .or_else(|| non_empty(record.description.as_deref()))
            .unwrap_or(FALLBACK_DESCRIPTION)
            .to_string();

        let language_color = entry
            .custom_color
            .clone()
            .unwrap_or_else(|| language_color(record.language.as_deref()).to_string());

        let popularity_score = popularity_score(
            record.stars,
            record.forks,
            entry.showcase,
            match scoring {
                Scoring::Basic => None,
                Scoring::WithPriorityBonus => Some(entry.priority),
            },
        );

        Self {
            description,
            url: record.url.map(String::from).unwrap_or_default(),
            language: record
                .language
                .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
            language_color,
            stars: record.stars,
            forks: record.forks,
            priority: entry.priority,
            tags: entry.tags.clone(),
            updated_at: record.updated_at,
            size: record.size,
            showcase: entry.showcase,
            category: entry.category.clone(),
            dev_state: entry.dev_state.clone(),
            image_url: entry.image_url.clone(),
            accent_color: None,
            popularity_score,
            name: record.name,
        }
    }
}

/// Computes `stars*2 + forks*3 + (1000 if showcase)`, plus the priority bonus
/// when a priority is supplied.
#[must_use]
pub fn popularity_score(stars: u32, forks: u32, showcase: bool, priority: Option<u32>) -> u64 {
    let base = u64::from(stars) * 2 + u64::from(forks) * 3;
    let showcase = if showcase { SHOWCASE_BONUS } else { 0 };
    base + showcase + priority.map_or(0, priority_bonus)
}

/// `max(0, 100 - priority) * 10`.
#[must_use]
pub fn priority_bonus(priority: u32) -> u64 {
    u64::from(PRIORITY_BONUS_CEILING.saturating_sub(priority)) * PRIORITY_BONUS_STEP
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::colors::FALLBACK_COLOR;

    fn record(description: Option<&str>, language: Option<&str>) -> RepositoryRecord {
        RepositoryRecord {
            name: "widget".to_string(),
            description: description.map(str::to_string),
            url: Some("https://github.com/octo/widget".parse().unwrap()),
            language: language.map(str::to_string),
            stars: 10,
            forks: 4,
            size: 120,
            updated_at: None,
        }
    }

    #[test]
    fn remote_description_used_without_override() {
        let info = RepositoryInfo::merge(
            record(Some("A widget"), Some("Rust")),
            &RepositoryConfig::default(),
            Scoring::Basic,
        );

        assert_eq!(info.description, "A widget");
        assert_eq!(info.language, "Rust");
        assert_eq!(info.language_color, "#dea584");
        assert_eq!(info.url, "https://github.com/octo/widget");
    }

    #[test]
    fn fallback_description_when_both_empty() {
        let entry = RepositoryConfig {
            description_override: Some(String::new()),
            ..RepositoryConfig::default()
        };

        let info = RepositoryInfo::merge(record(None, None), &entry, Scoring::Basic);

        assert_eq!(info.description, FALLBACK_DESCRIPTION);
        assert_eq!(info.language, FALLBACK_LANGUAGE);
        assert_eq!(info.language_color, FALLBACK_COLOR);
    }

    #[test]
    fn whitespace_description_is_kept() {
        let entry = RepositoryConfig {
            description_override: Some("   ".to_string()),
            ..RepositoryConfig::default()
        };

        let info = RepositoryInfo::merge(record(Some("Remote"), None), &entry, Scoring::Basic);

        assert_eq!(info.description, "   ");
    }

    #[test]
    fn config_overrides_win() {
        let entry = RepositoryConfig {
            description_override: Some("Curated text".to_string()),
            custom_color: Some("#123456".to_string()),
            tags: vec!["cli".to_string()],
            dev_state: Some("beta".to_string()),
            ..RepositoryConfig::default()
        };

        let info = RepositoryInfo::merge(record(Some("Remote"), Some("Go")), &entry, Scoring::Basic);

        assert_eq!(info.description, "Curated text");
        assert_eq!(info.language_color, "#123456");
        assert_eq!(info.tags, ["cli"]);
        assert_eq!(info.dev_state.as_deref(), Some("beta"));
        assert_eq!(info.stars, 10);
        assert_eq!(info.forks, 4);
    }

    #[test]
    fn score_formula() {
        assert_eq!(popularity_score(10, 4, false, None), 32);
        assert_eq!(popularity_score(10, 4, true, None), 1032);
        assert_eq!(popularity_score(10, 4, true, Some(1)), 1032 + 990);
        assert_eq!(popularity_score(10, 4, true, Some(999)), 1032);
    }

    #[test]
    fn score_is_deterministic() {
        let entry = RepositoryConfig {
            priority: 3,
            ..RepositoryConfig::default()
        };
        let a = RepositoryInfo::merge(record(None, None), &entry, Scoring::WithPriorityBonus);
        let b = RepositoryInfo::merge(record(None, None), &entry, Scoring::WithPriorityBonus);

        assert_eq!(a.popularity_score, b.popularity_score);
        assert_eq!(a.popularity_score, 20 + 12 + 1000 + 970);
    }
}
