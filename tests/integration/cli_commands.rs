use assert_cmd::Command;
use crumbtrail_cli::test_utils::PageTreeFixture;
use predicates::prelude::*;

/// A page tree with a small help hierarchy and an empty configuration file.
fn help_tree() -> PageTreeFixture {
    let fixture = PageTreeFixture::new().unwrap();
    fixture.page("Help:Contents", "Index of help pages.").unwrap();
    fixture.page("Help:Editing", "<crumb:trail>Help:Contents|Help</crumb:trail>").unwrap();
    fixture
        .page("Help:Links", r#"<crumb:trail self="Links">Help:Editing</crumb:trail> About links."#)
        .unwrap();
    fixture.config_file("").unwrap();
    fixture
}

/// The binary, isolated from the user's configuration and pointed at `fixture`.
fn crumbtrail(fixture: &PageTreeFixture) -> Command {
    let mut cmd = Command::cargo_bin("crumbtrail").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(fixture.root().join("crumbtrail.toml"))
        .arg("--pages-dir")
        .arg(fixture.root());
    cmd
}

#[test]
fn test_render_text() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["render", "Help:Links", "--format", "text"])
        .assert()
        .success()
        .stdout("Help > Help:Editing > Links\n");
}

#[test]
fn test_render_html_default() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["render", "help:links"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<div id="crumbtrail" class="noprint">"#))
        .stdout(predicate::str::contains(r#"<a href="/wiki/Help:Contents" title="Help:Contents">Help</a>"#));
}

#[test]
fn test_render_json() {
    let fixture = help_tree();
    let output = crumbtrail(&fixture).args(["render", "Help:Links", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["page"]["namespace"], "Help");
    assert_eq!(report["dependencies"].as_array().unwrap().len(), 4);
}

#[test]
fn test_render_missing_page_fails() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["render", "Help:Nowhere"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Page 'Help:Nowhere' not found"))
        .stderr(predicate::str::contains("--pages-dir"));
}

#[test]
fn test_render_invalid_title_fails() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["render", "Bad[title]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page reference"));
}

#[test]
fn test_suggest() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["suggest", "https://wiki.example.org/index.php?title=Help:Links&action=edit"])
        .assert()
        .success()
        .stdout("<crumb:trail>Help:Links|Links</crumb:trail>\n");

    crumbtrail(&fixture)
        .args(["suggest", "https://wiki.example.org/Help:Contents", "--separator", "/"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_extract() {
    let fixture = help_tree();
    let output = crumbtrail(&fixture).args(["extract", "Help:Editing"]).output().unwrap();
    assert!(output.status.success());

    let declaration: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(declaration["parent_path"], "Help:Contents");
    assert_eq!(declaration["display_label"], "Help");
    assert!(declaration["self_label"].is_null());

    crumbtrail(&fixture)
        .args(["extract", "Help:Contents"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("has no breadcrumb directive"));
}

#[test]
fn test_verbose_logs_walk() {
    let fixture = help_tree();
    crumbtrail(&fixture)
        .args(["--verbose", "render", "Help:Links", "--format", "text"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Breadcrumb for 'Help:Links'"));
}
