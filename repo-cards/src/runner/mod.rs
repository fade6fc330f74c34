//! Orchestrates a card generation run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_DIR, DEFAULT_SECTION_PATH};
pub use error::RunnerError;

use crate::cards::Showcase;
use crate::config::CardsConfig;
use crate::github::{fetch_listed, fetch_named, GitHubSource, RepositorySource};
use crate::metadata::{MetadataSnapshot, METADATA_FILE};
use crate::readme::{update_document, write_section};
use crate::summary::{ProcessingResult, RunSummary};
use crate::templates::{card_file_name, TemplateRenderer};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

/// Runs the pipeline once: load config, fetch, merge, render, write.
pub struct Runner<S = GitHubSource> {
    config: RunnerConfig,
    source: S,
    renderer: TemplateRenderer,
}

impl Runner<GitHubSource> {
    /// Builds a runner that fetches from GitHub with the configured token.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = GitHubSource::new(config.token())?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: RepositorySource> Runner<S> {
    /// Builds a runner over an arbitrary repository source.
    pub fn with_source(config: RunnerConfig, source: S) -> Self {
        Self {
            config,
            source,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Executes the full pipeline.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());

        info!(path = %self.config.config_path().display(), "Loading configuration");
        let cards_config = CardsConfig::load_or_init(self.config.config_path())?;
        summary.repositories_configured = cards_config.repositories.len();

        if cards_config.repositories.is_empty() {
            warn!("No repositories configured");
        }

        let names = cards_config.repositories.keys().map(String::as_str);
        let outcome = if cards_config.is_categorized() {
            fetch_named(&self.source, self.config.username(), names).await?
        } else {
            fetch_listed(&self.source, self.config.username(), names).await?
        };

        summary.repositories_fetched = outcome.records.len();
        for name in outcome.missing {
            summary.record_result(ProcessingResult::Skipped {
                repository: name,
                reason: "not found or inaccessible".to_string(),
            });
        }

        let showcase = Showcase::prepare(outcome.records, &cards_config);
        summary.repositories_selected = showcase.len();
        summary.total_stars = showcase.total_stars();
        summary.total_forks = showcase.total_forks();
        info!(
            selected = showcase.len(),
            categorized = cards_config.is_categorized(),
            "Prepared showcase"
        );

        if self.config.dry_run() {
            print_dry_run_preview(&showcase, self.config.output_dir());
            return Ok(summary);
        }

        self.write_cards(&showcase, &cards_config, &mut summary)?;
        self.write_document(&showcase, &cards_config)?;

        let metadata_path = self.config.output_dir().join(METADATA_FILE);
        MetadataSnapshot::new(&showcase, cards_config.settings.layout, Utc::now())
            .write(&metadata_path)?;

        Ok(summary)
    }

    fn write_cards(
        &self,
        showcase: &Showcase,
        cards_config: &CardsConfig,
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let output_dir = self.config.output_dir();
        std::fs::create_dir_all(output_dir).map_err(|e| RunnerError::IoError {
            path: output_dir.display().to_string(),
            source: e,
        })?;

        for info in showcase.repositories() {
            let svg = self.renderer.render_card(info, &cards_config.settings)?;
            let card_path = output_dir.join(card_file_name(&info.name));
            std::fs::write(&card_path, svg).map_err(|e| RunnerError::IoError {
                path: card_path.display().to_string(),
                source: e,
            })?;

            info!(repo = %info.name, score = info.popularity_score, "Wrote card");
            summary.record_result(ProcessingResult::Rendered {
                repository: info.name.clone(),
                card_path,
            });
        }

        Ok(())
    }

    fn write_document(
        &self,
        showcase: &Showcase,
        cards_config: &CardsConfig,
    ) -> Result<(), RunnerError> {
        let card_base = self.config.output_dir().to_string_lossy();
        let section =
            self.renderer
                .render_section(showcase, &cards_config.settings, &card_base)?;

        match self.config.readme_path() {
            Some(readme) => update_document(readme, &section)?,
            None => write_section(self.config.section_path(), &section)?,
        }

        Ok(())
    }
}

fn print_dry_run_preview(showcase: &Showcase, output_dir: &Path) {
    println!("\n[DRY RUN] {} repositories selected:\n", showcase.len());

    for (i, info) in showcase.repositories().enumerate() {
        println!(
            "  [{}/{}] {} (stars: {}, forks: {}, score: {})",
            i + 1,
            showcase.len(),
            info.name,
            info.stars,
            info.forks,
            info.popularity_score
        );
        println!(
            "    Would write: {}",
            output_dir.join(card_file_name(&info.name)).display()
        );
    }

    println!();
}
