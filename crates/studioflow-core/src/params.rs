//! Parameter structures shared by the CLI and the MCP server.
//!
//! These carry raw, interface-level values (enum names as strings, optional
//! payload fields). The [`Studio`](crate::Studio) parses and validates them, so
//! every interface reports the same errors for the same bad input.
//!
//! Interfaces wrap these types to add their own derives:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct CreateProjectArgs { /* clap attributes */ }
//!
//! impl From<CreateProjectArgs> for CreateProject { /* ... */ }
//!
//! // In the MCP server
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct McpParams<T>(T);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateProject {
    /// Project name (required)
    pub name: String,
    /// One of `brand`, `digital`, `campaign`; defaults to `brand`
    pub category: Option<String>,
    /// Budget cap in whole dollars; omit or 0 for no cap
    pub budget_cap: Option<u64>,
}

/// Parameters addressing a project's workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProjectId {
    /// ID of the project
    pub project_id: u64,
}

/// Parameters for resolving the active step of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolveStep {
    /// ID of the project owning the step
    pub project_id: u64,
    /// ID of the step to resolve; must be the project's active step
    pub step_id: u64,
    /// One of `input`, `choose`, `approve`, `reject`, `acknowledge`
    pub action: String,
    /// Option key, or for deliverable selection a JSON array / comma list of
    /// keys. Approval gates take the key named by the action.
    #[serde(default)]
    pub chosen_option: Option<String>,
    /// Free text: the brief for input steps, custom deliverables for
    /// selection steps, a note otherwise
    #[serde(default)]
    pub input_text: Option<String>,
}
