use studioflow_core::{params::CreateProject, Project, Studio, StudioBuilder};
use tempfile::TempDir;

/// Helper function to create a test studio
pub async fn create_test_studio() -> (TempDir, Studio) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let studio = StudioBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create studio");
    (temp_dir, studio)
}

/// Create a project in the given category with an optional budget cap.
pub async fn create_project(studio: &Studio, category: &str, budget_cap: Option<u64>) -> Project {
    studio
        .create_project(&CreateProject {
            name: format!("{category} project"),
            category: Some(category.to_string()),
            budget_cap,
        })
        .await
        .expect("Failed to create project")
}
