//! MCP tool handler implementations.

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use studioflow_core::{display::Steps, params as core, Studio};

use super::errors::to_mcp_error;

/// Transparent wrapper adding MCP derives to a core parameter type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateProject = McpParams<core::CreateProject>;
pub type ProjectId = McpParams<core::ProjectId>;
pub type ResolveStep = McpParams<core::ResolveStep>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    studio: Arc<Studio>,
}

impl McpHandlers {
    pub fn new(studio: Arc<Studio>) -> Self {
        Self { studio }
    }

    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProject>,
    ) -> McpResult {
        debug!("create_project: {params:?}");

        let result = self
            .studio
            .create_project_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create project", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_projects(&self) -> McpResult {
        debug!("list_projects");

        let projects = self
            .studio
            .list_projects_result()
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        let title = if projects.is_empty() {
            "# No projects found"
        } else {
            "# Projects"
        };
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{title}\n\n{projects}"
        ))]))
    }

    pub async fn show_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_project: {params:?}");

        let project = self
            .studio
            .show_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show project", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            project.to_string(),
        )]))
    }

    /// Markdown for people plus the raw steps as JSON for programs.
    pub async fn get_workflow(&self, Parameters(params): Parameters<ProjectId>) -> McpResult {
        debug!("get_workflow: {params:?}");

        let steps = self
            .studio
            .get_workflow(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load workflow", &e))?;

        Self::steps_result(Steps(steps))
    }

    pub async fn resolve_step(&self, Parameters(params): Parameters<ResolveStep>) -> McpResult {
        debug!("resolve_step: {params:?}");

        let steps = self
            .studio
            .resolve_step(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve step", &e))?;

        Self::steps_result(Steps(steps))
    }

    pub async fn list_deliverables(
        &self,
        Parameters(params): Parameters<ProjectId>,
    ) -> McpResult {
        debug!("list_deliverables: {params:?}");

        let deliverables = self
            .studio
            .deliverables_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list deliverables", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            deliverables.to_string(),
        )]))
    }

    fn steps_result(steps: Steps) -> McpResult {
        let json = Content::json(&steps.0)?;
        Ok(CallToolResult::success(vec![
            Content::text(steps.to_string()),
            json,
        ]))
    }
}
