//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server returns.

use std::process::Command;

use studioflow_core::{
    display::{Deliverables, Steps},
    params::{CreateProject, Id, ProjectId, ResolveStep},
    Studio, StudioBuilder,
};
use tempfile::TempDir;

async fn create_test_studio() -> (Studio, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let studio = StudioBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create studio");

    (studio, temp_dir)
}

/// Run a CLI command against the given database and capture stdout
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let db_path = temp_dir.path().join("test.db");
    let output = Command::new(env!("CARGO_BIN_EXE_sf"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(
        output.status.success(),
        "sf {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_workflow_display_consistency() {
    let (studio, temp_dir) = create_test_studio().await;
    let project = studio
        .create_project(&CreateProject {
            name: "Consistency".to_string(),
            category: Some("campaign".to_string()),
            budget_cap: Some(10_000),
        })
        .await
        .expect("Failed to create project");
    let params = ProjectId {
        project_id: project.id,
    };

    // The CLI seeds the workflow, the direct call then reads the same rows
    let cli_output = run_cli_command(&temp_dir, &["workflow", "show", &project.id.to_string()]);
    let steps = studio.get_workflow(&params).await.expect("Failed to load workflow");
    assert_eq!(cli_output, Steps(steps).to_string());
}

#[tokio::test]
async fn test_project_and_deliverables_consistency() {
    let (studio, temp_dir) = create_test_studio().await;
    let project = studio
        .create_project(&CreateProject {
            name: "Storefront".to_string(),
            category: Some("digital".to_string()),
            budget_cap: None,
        })
        .await
        .expect("Failed to create project");
    let params = ProjectId {
        project_id: project.id,
    };
    let steps = studio.get_workflow(&params).await.expect("Failed to seed");

    let resolutions = [
        (steps[0].id, "input", None, Some("Online shop for a roastery")),
        (steps[1].id, "choose", Some("A"), None),
        (steps[2].id, "approve", Some("approve"), None),
        (steps[3].id, "choose", Some("ui_design, design_system"), None),
    ];
    for (step_id, action, option, input) in resolutions {
        studio
            .resolve_step(&ResolveStep {
                project_id: project.id,
                step_id,
                action: action.to_string(),
                chosen_option: option.map(String::from),
                input_text: input.map(String::from),
            })
            .await
            .expect("Failed to resolve step");
    }

    let id = project.id.to_string();
    let cli_project = run_cli_command(&temp_dir, &["project", "show", &id]);
    let direct_project = studio
        .show_project(&Id { id: project.id })
        .await
        .expect("Failed to show project");
    assert_eq!(cli_project, direct_project.to_string());
    assert!(cli_project.contains("Online shop for a roastery"));

    let cli_deliverables = run_cli_command(&temp_dir, &["deliverable", "list", &id]);
    let direct_deliverables = Deliverables(
        studio
            .list_deliverables(&params)
            .await
            .expect("Failed to list deliverables"),
    );
    assert_eq!(cli_deliverables, direct_deliverables.to_string());
    assert_eq!(direct_deliverables.0.len(), 2);
}
