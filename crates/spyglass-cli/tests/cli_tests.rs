use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PORTFOLIO_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Website Redesign",
        "services": [
            {
                "id": 10,
                "serviceName": "Design",
                "tasks": [
                    {"id": 100, "name": "Draft homepage", "taskStatus": {"name": "In Progress"}},
                    {"id": 101, "name": "Review mockups", "taskStatus": {"name": "Completed"}}
                ]
            }
        ]
    },
    {
        "id": 2,
        "name": "Acme Launch",
        "services": [
            {
                "id": 20,
                "serviceName": "SEO Audit",
                "tasks": [
                    {"id": 200, "name": "Write SEO brief", "taskStatus": {"name": "Pending"}},
                    {"id": 201, "name": "Publish report", "taskStatus": {"name": "Completed"}}
                ]
            }
        ]
    }
]"#;

/// Helper to write the fixture portfolio into a temp dir.
fn create_portfolio_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("portfolio.json");
    fs::write(&path, PORTFOLIO_JSON).expect("Failed to write fixture file");
    (temp_dir, path)
}

/// Helper to create a Command with --no-color flag for testing
fn spyglass_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sg").expect("Failed to find sg binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_empty_search_shows_everything() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Website Redesign"))
        .stdout(predicate::str::contains("# 2. Acme Launch"))
        .stdout(predicate::str::contains("Review mockups"));
}

#[test]
fn test_cli_search_narrows_to_matching_project() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .args([path.to_str().unwrap(), "--search", "website"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"))
        .stdout(predicate::str::contains("Acme Launch").not());
}

#[test]
fn test_cli_active_only_drops_completed_tasks() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .args([path.to_str().unwrap(), "-s", "seo brief", "--active-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEO Audit (1/2 tasks)"))
        .stdout(predicate::str::contains("Write SEO brief"))
        .stdout(predicate::str::contains("Publish report").not());
}

#[test]
fn test_cli_search_is_case_insensitive() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .args([path.to_str().unwrap(), "-s", "WEBSITE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website Redesign"));
}

#[test]
fn test_cli_no_match_prints_empty_message() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .args([path.to_str().unwrap(), "-s", "zzz-nomatch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching projects."));
}

#[test]
fn test_cli_json_output() {
    let (_temp_dir, path) = create_portfolio_file();

    spyglass_cmd()
        .args([path.to_str().unwrap(), "-s", "seo brief", "-a", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filteredTasks\""))
        .stdout(predicate::str::contains("\"serviceName\": \"SEO Audit\""));
}

#[test]
fn test_cli_reads_stdin_when_no_file_given() {
    spyglass_cmd()
        .args(["--search", "acme"])
        .write_stdin(PORTFOLIO_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Launch"));
}

#[test]
fn test_cli_rejects_malformed_input() {
    spyglass_cmd()
        .write_stdin("not json at all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse project tree"));
}

#[test]
fn test_cli_reports_missing_input_file() {
    spyglass_cmd()
        .arg("/nonexistent/portfolio.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}
