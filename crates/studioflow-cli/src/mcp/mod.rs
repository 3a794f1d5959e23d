//! MCP server exposing the workflow engine over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use studioflow_core::Studio;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateProject, Id, McpResult, ProjectId, ResolveStep};

const INSTRUCTIONS: &str = r#"Studioflow runs creative-agency projects through a fixed, human-in-the-loop workflow.

## Concepts
- **Project**: a client engagement with a category (brand, digital, campaign) and an optional budget cap
- **Step**: one unit of work owned by an agent (Strategist, Director, Designer, CFO); exactly one step is active at a time
- **Deliverable**: a production item committed when the deliverable selection step is resolved

## Resolving steps
Call `get_workflow` to see the active step and its options, then `resolve_step` with the action its type accepts:
- input_needed: action `input` with non-empty `input_text`
- decision_gate: action `choose` with `chosen_option` set to one option key
- deliverable_selection: action `choose` with `chosen_option` as a JSON array or comma list of keys; `input_text` may add comma-separated custom items
- approval_gate: action `approve` or `reject`; `chosen_option` may be omitted, and if given must equal the action; rejecting records the review and still advances
- agent_output: action `acknowledge` with no option

Errors carry a `kind` of not_found, invalid_state or invalid_action in their data."#;

/// MCP server for Studioflow
#[derive(Clone)]
pub struct StudioMcpServer {
    studio: Arc<Studio>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StudioMcpServer {
    pub fn new(studio: Studio) -> Self {
        Self {
            studio: Arc::new(studio),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.studio.clone())
    }

    #[tool(
        name = "create_project",
        description = "Create a project. Provide a name, an optional category (brand, digital or campaign; default brand) and an optional budget_cap in whole dollars. The workflow is seeded on first access."
    )]
    async fn create_project(&self, params: Parameters<CreateProject>) -> McpResult {
        self.handlers().create_project(params).await
    }

    #[tool(
        name = "list_projects",
        description = "List all projects, newest first, with category, stage and budget."
    )]
    async fn list_projects(&self) -> McpResult {
        self.handlers().list_projects().await
    }

    #[tool(
        name = "show_project",
        description = "Show a project with its brief, adopted direction, review status and every workflow step."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params).await
    }

    #[tool(
        name = "get_workflow",
        description = "Return a project's workflow steps in order, seeding the canonical sequence on first call. Includes markdown and the raw steps as JSON."
    )]
    async fn get_workflow(&self, params: Parameters<ProjectId>) -> McpResult {
        self.handlers().get_workflow(params).await
    }

    #[tool(
        name = "resolve_step",
        description = "Resolve the project's active step and advance the workflow. The action must be legal for the step type (see server instructions). Returns the updated step list. Fails without changing anything on unknown ids (not_found), non-active steps (invalid_state) or bad actions/payloads (invalid_action)."
    )]
    async fn resolve_step(&self, params: Parameters<ResolveStep>) -> McpResult {
        self.handlers().resolve_step(params).await
    }

    #[tool(
        name = "list_deliverables",
        description = "List the deliverables committed for a project with cost, phase and owner (agent for catalog items, founder for custom entries)."
    )]
    async fn list_deliverables(&self, params: Parameters<ProjectId>) -> McpResult {
        self.handlers().list_deliverables(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StudioMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StudioMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Studioflow MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
