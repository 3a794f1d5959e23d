//! Handler operations returning display-ready wrappers.
//!
//! Both the CLI and the MCP server print these results directly, so the two
//! interfaces render identical markdown.

use super::Studio;
use crate::{
    display::{CreateResult, DeleteResult, Deliverables, Projects, ResolveResult, Steps},
    error::{Result, StudioError},
    models::Project,
    params::{CreateProject, Id, ProjectId, ResolveStep},
};

impl Studio {
    pub async fn create_project_result(
        &self,
        params: &CreateProject,
    ) -> Result<CreateResult<Project>> {
        self.create_project(params).await.map(CreateResult::new)
    }

    pub async fn list_projects_result(&self) -> Result<Projects> {
        self.list_projects().await.map(Projects)
    }

    /// Show a project, seeding its workflow so the steps are always present.
    pub async fn show_project(&self, params: &Id) -> Result<Project> {
        self.get_workflow(&ProjectId {
            project_id: params.id,
        })
        .await?;
        self.get_project(params)
            .await?
            .ok_or(StudioError::ProjectNotFound { id: params.id })
    }

    pub async fn delete_project_result(&self, params: &Id) -> Result<DeleteResult<Project>> {
        self.delete_project(params).await.map(DeleteResult::new)
    }

    pub async fn workflow_result(&self, params: &ProjectId) -> Result<Steps> {
        self.get_workflow(params).await.map(Steps)
    }

    pub async fn resolve_step_result(&self, params: &ResolveStep) -> Result<ResolveResult> {
        let steps = self.resolve_step(params).await?;
        Ok(ResolveResult::new(params.step_id, Steps(steps)))
    }

    pub async fn deliverables_result(&self, params: &ProjectId) -> Result<Deliverables> {
        self.list_deliverables(params).await.map(Deliverables)
    }
}
