//! Workflow operations for the Studio: seeding, projection and resolution.

use tokio::task;

use super::Studio;
use crate::{
    db::Database,
    error::{JoinResultExt, Result, StudioError},
    models::{Resolution, StepStatus, WorkflowStep},
    params::{ProjectId, ResolveStep},
    workflow::seed,
};

impl Studio {
    /// Materialize the canonical workflow unless the project already has one.
    ///
    /// Returns `true` when steps were created. Serialized with resolution on
    /// the same project.
    pub async fn seed(&self, params: &ProjectId) -> Result<bool> {
        let project_id = params.project_id;
        let lock = self.locks.for_project(project_id);
        let _guard = lock.lock().await;

        let db_path = self.db_path.clone();
        let seeded = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let project = db
                .get_project(project_id)?
                .ok_or(StudioError::ProjectNotFound { id: project_id })?;
            if !project.steps.is_empty() {
                return Ok(false);
            }
            db.seed_workflow(project_id, &seed::canonical_steps(&project))
        })
        .await
        .join_context();
        self.locks.release_if_missing(project_id, &seeded);
        let seeded = seeded?;

        if seeded {
            log::debug!("Seeded workflow for project {project_id}");
        }
        Ok(seeded)
    }

    /// Whether the project has a workflow. Never writes.
    pub async fn is_seeded(&self, params: &ProjectId) -> Result<bool> {
        let db_path = self.db_path.clone();
        let project_id = params.project_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            if db.get_project(project_id)?.is_none() {
                return Err(StudioError::ProjectNotFound { id: project_id });
            }
            db.has_steps(project_id)
        })
        .await
        .join_context()
    }

    /// The project's steps by `order_index`, seeding on first access.
    pub async fn get_workflow(&self, params: &ProjectId) -> Result<Vec<WorkflowStep>> {
        if !self.is_seeded(params).await? {
            self.seed(params).await?;
        }

        let db_path = self.db_path.clone();
        let project_id = params.project_id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_steps(project_id)
        })
        .await
        .join_context()
    }

    /// The single active step, or `None` once the workflow is complete.
    pub async fn active_step(&self, params: &ProjectId) -> Result<Option<WorkflowStep>> {
        let steps = self.get_workflow(params).await?;
        Ok(steps.into_iter().find(|s| s.status == StepStatus::Active))
    }

    /// Resolve the project's active step and advance the workflow.
    ///
    /// Returns the full ordered step list after the change. On error the
    /// workflow is left untouched.
    pub async fn resolve_step(&self, params: &ResolveStep) -> Result<Vec<WorkflowStep>> {
        let mut resolution = Resolution::named(params.action.trim());
        if let Some(option) = &params.chosen_option {
            resolution = resolution.with_option(option.clone());
        }
        if let Some(input) = &params.input_text {
            resolution = resolution.with_input(input.clone());
        }

        let project_id = params.project_id;
        let step_id = params.step_id;
        let lock = self.locks.for_project(project_id);
        let _guard = lock.lock().await;

        let db_path = self.db_path.clone();
        let steps = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.resolve_step(project_id, step_id, &resolution)
        })
        .await
        .join_context();
        self.locks.release_if_missing(project_id, &steps);
        let steps = steps?;

        log::debug!(
            "Resolved step {step_id} of project {project_id} with '{}'",
            params.action.trim()
        );
        Ok(steps)
    }
}
