use std::fs;
use std::path::{Path, PathBuf};

use repo_cards::{
    FetchError, ProcessingResult, RepositoryRecord, RepositorySource, Runner, RunnerConfig,
    RunnerError, CLOSE_MARKER, OPEN_MARKER,
};
use serde_json::Value;
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

struct StaticSource(Vec<RepositoryRecord>);

impl RepositorySource for StaticSource {
    async fn list_repositories(&self, _user: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        Ok(self.0.clone())
    }

    async fn get_repository(
        &self,
        _user: &str,
        name: &str,
    ) -> Result<Option<RepositoryRecord>, FetchError> {
        Ok(self.0.iter().find(|r| r.name == name).cloned())
    }
}

/// Resolves names case-insensitively and answers with the canonical name.
struct CanonicalSource(Vec<RepositoryRecord>);

impl RepositorySource for CanonicalSource {
    async fn list_repositories(&self, _user: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        Ok(self.0.clone())
    }

    async fn get_repository(
        &self,
        _user: &str,
        name: &str,
    ) -> Result<Option<RepositoryRecord>, FetchError> {
        Ok(self
            .0
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}

fn record(name: &str, stars: u32, forks: u32) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        description: Some(format!("The {name} project")),
        url: Some(format!("https://github.com/octo/{name}").parse().unwrap()),
        language: Some("Rust".to_string()),
        stars,
        forks,
        size: 64,
        updated_at: None,
    }
}

fn runner_config(temp: &TempDir, config_path: &Path) -> RunnerConfig {
    RunnerConfig::new("octo".to_string(), "token".to_string())
        .with_config_path(config_path.to_path_buf())
        .with_output_dir(temp.path().join("repo-cards"))
        .with_section_path(temp.path().join("REPO_CARDS.md"))
}

fn read_metadata(temp: &TempDir) -> Value {
    let content = fs::read_to_string(temp.path().join("repo-cards/metadata.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn max_cards_keeps_only_the_most_starred() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::write(
        &config_path,
        r#"{
            "repositories": { "small": {}, "big": {} },
            "settings": { "sort_by": "stars", "sort_direction": "desc", "max_cards": 1 }
        }"#,
    )
    .unwrap();

    let source = StaticSource(vec![record("small", 10, 0), record("big", 100, 0)]);
    let summary = Runner::with_source(runner_config(&temp, &config_path), source)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.cards_written, 1);
    assert!(temp.path().join("repo-cards/big-card.svg").exists());
    assert!(!temp.path().join("repo-cards/small-card.svg").exists());

    let metadata = read_metadata(&temp);
    assert_eq!(metadata["total_repositories"], 1);
    assert_eq!(metadata["total_stars"], 100);
    assert_eq!(metadata["repositories"][0]["name"], "big");

    let section = fs::read_to_string(temp.path().join("REPO_CARDS.md")).unwrap();
    assert!(section.contains("big-card.svg"));
    assert!(!section.contains("small-card.svg"));
}

#[tokio::test]
async fn readme_region_is_replaced_in_place() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::write(&config_path, r#"{ "repositories": { "widget": {} } }"#).unwrap();

    let readme_path = temp.path().join("README.md");
    let before = "# Hi there\n\nSome intro.\n\n";
    let after = "\n\n## Contact\n";
    fs::write(
        &readme_path,
        format!("{before}{OPEN_MARKER}\nstale cards\n{CLOSE_MARKER}{after}"),
    )
    .unwrap();

    let config = runner_config(&temp, &config_path).with_readme_path(readme_path.clone());
    let source = StaticSource(vec![record("widget", 3, 1)]);
    Runner::with_source(config, source).run().await.unwrap();

    let readme = fs::read_to_string(&readme_path).unwrap();
    assert!(readme.starts_with(&format!("{before}{OPEN_MARKER}\n")));
    assert!(readme.ends_with(&format!("{CLOSE_MARKER}{after}")));
    assert!(readme.contains("widget-card.svg"));
    assert!(!readme.contains("stale cards"));
    assert!(!temp.path().join("REPO_CARDS.md").exists());
}

#[tokio::test]
async fn categorized_run_groups_scores_and_skips() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::copy(fixtures_root().join("categorized_config.json"), &config_path).unwrap();

    let source = StaticSource(vec![
        record("parser-kit", 40, 5),
        record("tiny-log", 300, 20),
        record("fast-grep", 12, 2),
    ]);
    let summary = Runner::with_source(runner_config(&temp, &config_path), source)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.repositories_configured, 4);
    assert_eq!(summary.repositories_fetched, 3);
    assert_eq!(summary.cards_written, 3);
    assert_eq!(summary.skipped().collect::<Vec<_>>(), ["deleted-repo"]);
    assert!(summary.results.iter().any(|result| matches!(
        result,
        ProcessingResult::Skipped { repository, .. } if repository == "deleted-repo"
    )));

    let metadata = read_metadata(&temp);
    assert_eq!(metadata["total_repositories"], 3);
    assert_eq!(metadata["total_stars"], 352);
    assert_eq!(metadata["layout"], "list");

    let categories = metadata["categories"].as_object().unwrap();
    let order: Vec<&str> = categories.keys().map(String::as_str).collect();
    assert_eq!(order, ["Tools", "Libraries"]);

    let libraries = &metadata["categories"]["Libraries"];
    assert_eq!(libraries["total_stars"], 340);
    assert_eq!(libraries["total_forks"], 25);
    // parser-kit: 80 + 15 + 1000 + 990; tiny-log: 600 + 60 + 0 + 950.
    assert_eq!(libraries["repositories"][0]["name"], "parser-kit");
    assert_eq!(libraries["repositories"][0]["popularity_score"], 2085);
    assert_eq!(libraries["repositories"][1]["popularity_score"], 1610);
    assert_eq!(metadata["categories"]["Tools"]["total_stars"], 12);

    let card = fs::read_to_string(temp.path().join("repo-cards/fast-grep-card.svg")).unwrap();
    assert!(card.contains(">beta</text>"));
    assert!(card.contains("height=\"310\""));
    assert!(card.contains("fill=\"#2ea043\""));

    let section = fs::read_to_string(temp.path().join("REPO_CARDS.md")).unwrap();
    let tools = section.find("## Tools").unwrap();
    let libraries = section.find("## 📦 Libraries").unwrap();
    assert!(tools < libraries);
    assert!(section.contains("Reusable crates"));
}

#[tokio::test]
async fn malformed_config_aborts_before_fetching() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::write(&config_path, "{ \"repositories\": ").unwrap();

    let result = Runner::with_source(runner_config(&temp, &config_path), StaticSource(vec![]))
        .run()
        .await;

    assert!(matches!(result, Err(RunnerError::Config(_))));
    assert!(!temp.path().join("repo-cards").exists());
}

#[tokio::test]
async fn zero_max_cards_renders_everything() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::write(
        &config_path,
        r#"{ "repositories": { "a": {}, "b": {} }, "settings": { "max_cards": 0 } }"#,
    )
    .unwrap();

    let source = StaticSource(vec![record("a", 1, 0), record("b", 2, 0)]);
    let summary = Runner::with_source(runner_config(&temp, &config_path), source)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.cards_written, 2);
}

#[tokio::test]
async fn canonical_name_from_github_is_still_rendered() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("repo_config.json");
    fs::write(
        &config_path,
        r#"{
            "categories": { "Tools": { "priority": 1 } },
            "repositories": { "mytool": { "category": "Tools", "priority": 1 } }
        }"#,
    )
    .unwrap();

    let source = CanonicalSource(vec![record("MyTool", 5, 1)]);
    let summary = Runner::with_source(runner_config(&temp, &config_path), source)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.repositories_fetched, 1);
    assert_eq!(summary.repositories_selected, 1);
    assert_eq!(summary.cards_written, 1);
    assert_eq!(summary.skipped().count(), 0);
    assert!(temp.path().join("repo-cards/MyTool-card.svg").exists());

    let metadata = read_metadata(&temp);
    let tools = &metadata["categories"]["Tools"]["repositories"][0];
    assert_eq!(tools["name"], "MyTool");
    // 10 + 3 + 1000 + 990 from the mytool entry's priority.
    assert_eq!(tools["popularity_score"], 2003);
}
