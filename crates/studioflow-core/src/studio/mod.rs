//! High-level engine API for projects and their workflows.
//!
//! [`Studio`] is the entry point used by every interface. It owns the database
//! path, runs blocking SQLite work on the tokio blocking pool, and serializes
//! seeding and resolution per project.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display-ready  │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │   wrappers)     │    │  workflow_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use studioflow_core::{
//!     params::{CreateProject, ProjectId, ResolveStep},
//!     StudioBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let studio = StudioBuilder::new()
//!     .with_database_path(Some(dir.path().join("studio.db")))
//!     .build()
//!     .await?;
//!
//! let project = studio
//!     .create_project(&CreateProject {
//!         name: "Northwind Rebrand".to_string(),
//!         category: Some("brand".to_string()),
//!         budget_cap: Some(5000),
//!     })
//!     .await?;
//!
//! // The first request seeds the canonical workflow
//! let steps = studio.get_workflow(&ProjectId { project_id: project.id }).await?;
//!
//! studio
//!     .resolve_step(&ResolveStep {
//!         project_id: project.id,
//!         step_id: steps[0].id,
//!         action: "input".to_string(),
//!         chosen_option: None,
//!         input_text: Some("Modernize a regional bakery chain".to_string()),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use crate::error::{Result, StudioError};

pub mod builder;
pub mod handlers;
pub mod project_ops;
pub mod workflow_ops;

#[cfg(test)]
mod tests;

pub use builder::StudioBuilder;

/// Main engine interface for projects, workflows and deliverables.
pub struct Studio {
    pub(crate) db_path: PathBuf,
    locks: ProjectLocks,
}

impl Studio {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self {
            db_path,
            locks: ProjectLocks::default(),
        }
    }
}

/// One async mutex per project, created on first use.
#[derive(Default)]
struct ProjectLocks(Mutex<HashMap<u64, Arc<tokio::sync::Mutex<()>>>>);

impl ProjectLocks {
    fn for_project(&self, project_id: u64) -> Arc<tokio::sync::Mutex<()>> {
        // The map only hands out Arcs, so a poisoned guard holds no broken state
        let mut locks = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(project_id).or_default().clone()
    }

    fn forget(&self, project_id: u64) {
        let mut locks = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        locks.remove(&project_id);
    }

    /// Drop the lock entry when `result` reports the project as missing.
    fn release_if_missing<T>(&self, project_id: u64, result: &Result<T>) {
        if let Err(StudioError::ProjectNotFound { id }) = result {
            if *id == project_id {
                self.forget(project_id);
            }
        }
    }
}
