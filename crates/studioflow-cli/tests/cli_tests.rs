use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a Command with --no-color and a fresh database
fn sf_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("sf").expect("Failed to find sf binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn create_project(temp_dir: &TempDir, args: &[&str]) {
    sf_cmd(temp_dir)
        .args(["project", "create"])
        .args(args)
        .assert()
        .success();
}

fn workflow_json(temp_dir: &TempDir, project_id: &str) -> Vec<Value> {
    let output = sf_cmd(temp_dir)
        .args(["workflow", "show", project_id, "--json"])
        .output()
        .expect("Failed to run sf");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("workflow --json should print a JSON array")
}

#[test]
fn test_cli_create_project_success() {
    let temp_dir = TempDir::new().unwrap();

    sf_cmd(&temp_dir)
        .args(["project", "create", "Harbor Coffee", "--budget", "4000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project with ID: 1"))
        .stdout(predicate::str::contains("# 1. Harbor Coffee"))
        .stdout(predicate::str::contains("Budget: $4,000"));
}

#[test]
fn test_cli_rejects_unknown_category() {
    let temp_dir = TempDir::new().unwrap();

    sf_cmd(&temp_dir)
        .args(["project", "create", "Odd", "--category", "sculpture"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_projects() {
    let temp_dir = TempDir::new().unwrap();

    sf_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_cli_workflow_show_seeds() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Harbor Coffee"]);

    sf_cmd(&temp_dir)
        .args(["workflow", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 0/7 resolved"))
        .stdout(predicate::str::contains("Project Brief (➤ Active)"))
        .stdout(predicate::str::contains("Budget Allocation (○ Pending)"));

    let steps = workflow_json(&temp_dir, "1");
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0]["status"], "active");
    assert_eq!(steps[3]["step_type"], "deliverable_selection");
}

#[test]
fn test_cli_resolve_and_advance() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Harbor Coffee", "--category", "digital"]);
    let steps = workflow_json(&temp_dir, "1");
    let first = steps[0]["id"].to_string();

    sf_cmd(&temp_dir)
        .args([
            "workflow",
            "resolve",
            "1",
            &first,
            "input",
            "--input",
            "A coffee roaster going online",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Resolved step {first}")))
        .stdout(predicate::str::contains("Strategic Direction"));

    sf_cmd(&temp_dir)
        .args(["workflow", "active", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Actions: choose"));
}

#[test]
fn test_cli_resolve_twice_reports_invalid_state() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Harbor Coffee"]);
    let steps = workflow_json(&temp_dir, "1");
    let first = steps[0]["id"].to_string();

    sf_cmd(&temp_dir)
        .args(["workflow", "resolve", "1", &first, "input", "-i", "Brief"])
        .assert()
        .success();

    sf_cmd(&temp_dir)
        .args([
            "workflow", "resolve", "1", &first, "input", "-i", "Again", "--json",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"invalid_state\""));
}

#[test]
fn test_cli_illegal_action_reports_invalid_action() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Harbor Coffee"]);
    let steps = workflow_json(&temp_dir, "1");
    let first = steps[0]["id"].to_string();

    sf_cmd(&temp_dir)
        .args(["workflow", "resolve", "1", &first, "approve", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"invalid_action\""));
}

#[test]
fn test_cli_unknown_project_not_found() {
    let temp_dir = TempDir::new().unwrap();

    sf_cmd(&temp_dir)
        .args(["workflow", "show", "42", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"not_found\""));

    sf_cmd(&temp_dir)
        .args(["project", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_deliverables_after_selection() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Harbor Coffee"]);
    let steps = workflow_json(&temp_dir, "1");
    let id = |i: usize| steps[i]["id"].to_string();

    let resolutions: [Vec<String>; 4] = [
        vec![id(0), "input".into(), "-i".into(), "Brief".into()],
        vec![id(1), "choose".into(), "-o".into(), "A".into()],
        vec![id(2), "approve".into(), "-o".into(), "approve".into()],
        vec![
            id(3),
            "choose".into(),
            "-o".into(),
            r#"["logo_system"]"#.into(),
            "-i".into(),
            "Packaging Design".into(),
        ],
    ];
    for args in resolutions {
        sf_cmd(&temp_dir)
            .args(["workflow", "resolve", "1"])
            .args(&args)
            .assert()
            .success();
    }

    sf_cmd(&temp_dir)
        .args(["deliverable", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Logo & Identity System | $1,500 |"))
        .stdout(predicate::str::contains("| Packaging Design | custom |"))
        .stdout(predicate::str::contains("Total: $1,500 (+1 custom)"));
}

#[test]
fn test_cli_delete_project() {
    let temp_dir = TempDir::new().unwrap();
    create_project(&temp_dir, &["Short Lived"]);

    sf_cmd(&temp_dir)
        .args(["project", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Short Lived' (ID: 1)"));

    sf_cmd(&temp_dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}
