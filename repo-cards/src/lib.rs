#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cards;
pub mod config;
pub mod github;
pub mod metadata;
pub mod readme;
pub mod runner;
pub mod summary;
pub mod templates;

pub use cards::{CategoryGroup, RepositoryInfo, Scoring, Showcase};
pub use config::{
    CardsConfig, CategoryConfig, ConfigError, Layout, RepositoryConfig, Settings, SortBy,
    SortDirection, Theme,
};
pub use github::{
    fetch_listed, fetch_named, FetchError, FetchOutcome, GitHubSource, RepositoryRecord,
    RepositorySource,
};
pub use metadata::{MetadataError, MetadataSnapshot};
pub use readme::{splice_region, update_document, DocumentError, CLOSE_MARKER, OPEN_MARKER};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{card_file_name, split_description, TemplateError, TemplateRenderer};
