//! Project operations for the Studio.

use tokio::task;

use super::Studio;
use crate::{
    db::Database,
    error::{JoinResultExt, Result, StudioError},
    models::{Deliverable, Project, ProjectCategory},
    params::{CreateProject, Id, ProjectId},
};

impl Studio {
    /// Creates a project. Its workflow is seeded on first access.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let category = match params.category.as_deref().map(str::trim) {
            None | Some("") => ProjectCategory::default(),
            Some(raw) => raw
                .parse::<ProjectCategory>()
                .map_err(|reason| StudioError::InvalidInput {
                    field: "category".to_string(),
                    reason,
                })?,
        };
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let budget_cap = params.budget_cap;

        let project = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_project(&name, category, budget_cap)
        })
        .await
        .join_context()?;

        log::debug!("Created project {} ({})", project.id, project.category);
        Ok(project)
    }

    /// Retrieves a project with whatever steps it has.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_project(id)
        })
        .await
        .join_context()
    }

    /// Lists all projects, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_projects()
        })
        .await
        .join_context()
    }

    /// Deletes a project with its steps and deliverables, returning what was
    /// deleted.
    pub async fn delete_project(&self, params: &Id) -> Result<Project> {
        let id = params.id;
        let lock = self.locks.for_project(id);
        let _guard = lock.lock().await;

        let db_path = self.db_path.clone();
        let project = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let project = db
                .get_project(id)?
                .ok_or(StudioError::ProjectNotFound { id })?;
            db.delete_project(id)?;
            Ok::<_, StudioError>(project)
        })
        .await
        .join_context();
        self.locks.release_if_missing(id, &project);
        let project = project?;

        self.locks.forget(id);
        log::debug!("Deleted project {id}");
        Ok(project)
    }

    /// Lists the deliverables committed for a project.
    pub async fn list_deliverables(&self, params: &ProjectId) -> Result<Vec<Deliverable>> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_deliverables(project_id)
        })
        .await
        .join_context()
    }
}
