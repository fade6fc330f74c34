//! Runner configuration.

use std::path::{Path, PathBuf};

/// Default location of the card configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "repo_config.json";

/// Default directory receiving card files and the metadata snapshot.
pub const DEFAULT_OUTPUT_DIR: &str = "repo-cards";

/// Default standalone section file, used when no README is spliced.
pub const DEFAULT_SECTION_PATH: &str = "REPO_CARDS.md";

/// Process-level configuration for a run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub login whose repositories are showcased.
    username: String,
    /// GitHub token used for API calls.
    token: String,
    /// Path to the card configuration file.
    config_path: PathBuf,
    /// Directory for card files and metadata.
    output_dir: PathBuf,
    /// README to splice the section into. `None` writes `section_path` instead.
    readme_path: Option<PathBuf>,
    /// Standalone section file.
    section_path: PathBuf,
    /// Whether to preview without writing outputs.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default paths.
    pub fn new(username: String, token: String) -> Self {
        Self {
            username,
            token,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            readme_path: None,
            section_path: PathBuf::from(DEFAULT_SECTION_PATH),
            dry_run: false,
        }
    }

    /// Sets the card configuration path.
    pub fn with_config_path(mut self, config_path: PathBuf) -> Self {
        self.config_path = config_path;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Splices the section into this README instead of writing a standalone file.
    pub fn with_readme_path(mut self, readme_path: PathBuf) -> Self {
        self.readme_path = Some(readme_path);
        self
    }

    /// Sets the standalone section file path.
    pub fn with_section_path(mut self, section_path: PathBuf) -> Self {
        self.section_path = section_path;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the GitHub login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the card configuration path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the README path, if splicing is enabled.
    pub fn readme_path(&self) -> Option<&Path> {
        self.readme_path.as_deref()
    }

    /// Returns the standalone section file path.
    pub fn section_path(&self) -> &Path {
        &self.section_path
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
