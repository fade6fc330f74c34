//! Remote repository snapshot.

use chrono::{DateTime, Utc};
use octocrab::models::Repository;
use url::Url;

/// Public metadata of one repository as reported by GitHub.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,

    /// Remote description, if any.
    pub description: Option<String>,

    /// Web URL of the repository.
    pub url: Option<Url>,

    /// Primary language, if detected.
    pub language: Option<String>,

    /// Stargazer count.
    pub stars: u32,

    /// Fork count.
    pub forks: u32,

    /// Repository size in kilobytes.
    pub size: u32,

    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Repository> for RepositoryRecord {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            url: repo.html_url,
            // GitHub reports `null` for repositories without detected code.
            language: repo
                .language
                .and_then(|value| value.as_str().map(str::to_owned)),
            stars: repo.stargazers_count.unwrap_or(0),
            forks: repo.forks_count.unwrap_or(0),
            size: repo.size.unwrap_or(0),
            updated_at: repo.updated_at,
        }
    }
}
