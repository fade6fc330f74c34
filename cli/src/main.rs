//! CLI for repo-cards.
//!
//! Fetches the configured repositories from GitHub and regenerates their
//! SVG cards, the README showcase section and the metadata snapshot.

use clap::Parser;
use repo_cards::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// repo-cards - Render showcased GitHub repositories as SVG cards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// GitHub user whose repositories are showcased.
    #[arg(long, env = "GITHUB_USERNAME")]
    username: String,

    /// Path to the card configuration file.
    #[arg(long, default_value = repo_cards::runner::DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,

    /// Directory for card files and metadata.json.
    #[arg(long, default_value = repo_cards::runner::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// README to splice the generated section into.
    #[arg(long)]
    readme_path: Option<PathBuf>,

    /// Standalone section file, used when --readme-path is not given.
    #[arg(long, default_value = repo_cards::runner::DEFAULT_SECTION_PATH)]
    section_path: PathBuf,

    /// Preview the selection without writing cards, section or metadata.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.username, args.token)
        .with_config_path(args.config_path)
        .with_output_dir(args.output_dir)
        .with_section_path(args.section_path)
        .with_dry_run(args.dry_run);
    if let Some(path) = args.readme_path {
        config = config.with_readme_path(path);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories configured: {}",
        summary.repositories_configured
    );
    println!("  Repositories fetched: {}", summary.repositories_fetched);
    println!("  Repositories selected: {}", summary.repositories_selected);
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    for name in summary.skipped() {
        println!("    - {name}");
    }

    if !summary.dry_run {
        println!("  Cards written: {}", summary.cards_written);
    }
    println!("  Total stars: {}", summary.total_stars);
    println!("  Total forks: {}", summary.total_forks);
}
