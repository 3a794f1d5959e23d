//! Core library for the Studioflow workflow engine.
//!
//! A creative-agency project moves through an ordered sequence of workflow
//! steps owned by nominal agents (Strategist, Director, Designer, CFO). Each
//! step waits for a human resolution: free-text input, a choice between
//! options, a deliverable selection, an approval, or an acknowledgment.
//!
//! The crate is layered:
//!
//! - [`models`]: projects, steps, deliverables and their enums
//! - [`workflow`]: pure rules (canonical seeding, the legality table,
//!   resolution planning, invariant checks)
//! - [`db`]: SQLite persistence; every mutation is one transaction
//! - [`studio`]: the async engine API used by the CLI and the MCP server
//! - [`display`]: markdown rendering of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use studioflow_core::{params::{CreateProject, ProjectId}, StudioBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = StudioBuilder::new()
//!     .with_database_path(Some("studioflow.db"))
//!     .build()
//!     .await?;
//!
//! let project = studio
//!     .create_project(&CreateProject {
//!         name: "Harbor Coffee".to_string(),
//!         category: None,
//!         budget_cap: Some(4000),
//!     })
//!     .await?;
//!
//! if let Some(step) = studio.active_step(&ProjectId { project_id: project.id }).await? {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod studio;
pub mod workflow;

pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Deliverables, LocalDateTime, OperationStatus, Projects,
    ResolveResult, Steps,
};
pub use error::{ErrorKind, ErrorReport, Result, StudioError};
pub use models::{
    Action, Agent, Deliverable, Phase, Project, ProjectCategory, ProjectStage, Resolution,
    StepStatus, StepType, WorkflowStep,
};
pub use params::{CreateProject, Id, ProjectId, ResolveStep};
pub use studio::{Studio, StudioBuilder};
