//! Project and deliverable models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DeliverableOwner, ProjectCategory, ProjectStage, ReviewStatus, WorkflowStep};

/// A creative-agency project owning one workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    pub name: String,

    /// Selects the direction set and deliverable catalog at seed time
    pub category: ProjectCategory,

    /// Budget cap in whole dollars; absent or zero means "not set"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_cap: Option<u64>,

    #[serde(default)]
    pub stage: ProjectStage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_brief: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,

    /// Workflow steps (lazy-loaded)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<WorkflowStep>,
}

impl Project {
    /// Budget cap when one is actually set.
    pub fn effective_budget(&self) -> Option<u64> {
        self.budget_cap.filter(|b| *b > 0)
    }
}

/// A production item derived from a resolved deliverable selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deliverable {
    pub id: u64,

    pub project_id: u64,

    pub title: String,

    /// Catalog key; `None` for custom entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_key: Option<String>,

    /// Estimated cost in whole dollars (0 for custom entries)
    pub cost: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    pub owner: DeliverableOwner,

    pub created_at: Timestamp,
}

/// A deliverable about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeliverable {
    pub title: String,
    pub catalog_key: Option<String>,
    pub cost: u64,
    pub phase: Option<String>,
    pub owner: DeliverableOwner,
}
