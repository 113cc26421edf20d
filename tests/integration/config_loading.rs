use assert_cmd::Command;
use crumbtrail_cli::config::{BrokenParentPolicy, CrumbtrailConfig};
use crumbtrail_cli::test_utils::PageTreeFixture;
use predicates::prelude::*;

fn chain_tree() -> PageTreeFixture {
    let fixture = PageTreeFixture::new().unwrap();
    fixture.page("A", "top").unwrap();
    fixture.page("B", "<crumb:trail>A</crumb:trail>").unwrap();
    fixture.page("C", "<crumb:trail>B</crumb:trail>").unwrap();
    fixture.page("D", "<crumb:trail>C</crumb:trail>").unwrap();
    fixture
}

fn render_text(fixture: &PageTreeFixture, config: &std::path::Path, page: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("crumbtrail")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config)
        .arg("--pages-dir")
        .arg(fixture.root())
        .args(["render", page, "--format", "text"])
        .assert()
}

#[tokio::test]
async fn test_config_file_values_are_used() {
    let fixture = chain_tree();
    let path = fixture
        .config_file(
            r#"
[breadcrumb]
delimiter = " / "
max_depth = 3
overflow_prefix = "&hellip;"
broken_parent_policy = "strict"
"#,
        )
        .unwrap();

    let config = CrumbtrailConfig::load_from(&path).await.unwrap();
    assert_eq!(config.breadcrumb.max_depth, 3);
    assert_eq!(config.breadcrumb.broken_parent_policy, BrokenParentPolicy::Strict);

    // Unknown entities stay as written
    render_text(&fixture, &path, "D").success().stdout("&hellip; / C / D\n");
}

#[test]
fn test_zero_depth_prints_nothing() {
    let fixture = chain_tree();
    let path = fixture.config_file("[breadcrumb]\nmax_depth = 0\n").unwrap();

    render_text(&fixture, &path, "D").success().stdout("");
}

#[test]
fn test_missing_config_file() {
    let fixture = chain_tree();
    let path = fixture.root().join("nope.toml");

    render_text(&fixture, &path, "D")
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_file() {
    let fixture = chain_tree();
    let path = fixture.config_file("[links]\narticle_path = \"/wiki/\"\n").unwrap();

    render_text(&fixture, &path, "D")
        .failure()
        .stderr(predicate::str::contains("article_path must contain the $1 placeholder"));
}
