//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Repository fetch errors.
    #[error(transparent)]
    Fetch(#[from] crate::github::FetchError),

    /// Card or section rendering errors.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// README or section file errors.
    #[error(transparent)]
    Document(#[from] crate::readme::DocumentError),

    /// Metadata snapshot errors.
    #[error(transparent)]
    Metadata(#[from] crate::metadata::MetadataError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Failed to write a card or create the output directory.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
