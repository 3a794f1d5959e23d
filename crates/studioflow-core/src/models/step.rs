//! Workflow step model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Action, Agent, Phase, StepEffect, StepStatus, StepType};
use crate::workflow::rules;

/// One choice offered by a gate step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepOption {
    /// Stable identifier submitted as `chosen_option`
    pub key: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Estimated cost in whole dollars (deliverable catalog items)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    /// Preselection before resolution, final choice after
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl StepOption {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            cost: None,
            phase: None,
            selected: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn is_selected(&self) -> bool {
        self.selected.unwrap_or(false)
    }
}

/// One gated node in a project's workflow timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowStep {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the owning project
    pub project_id: u64,

    /// Position in the workflow (0-indexed, contiguous)
    pub order_index: u32,

    pub agent: Agent,

    pub phase: Phase,

    pub title: String,

    /// Display payload; may carry markdown
    pub body: String,

    pub step_type: StepType,

    #[serde(default)]
    pub options: Vec<StepOption>,

    pub status: StepStatus,

    /// Set once resolved; a JSON key array for deliverable selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_option: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,

    /// Side effect applied to the project on resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<StepEffect>,

    /// Timestamp when the step was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the step was resolved (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
}

impl WorkflowStep {
    /// True only for the pending step with the lowest `order_index` among all
    /// pending and active steps of `steps`.
    pub fn is_activatable(&self, steps: &[WorkflowStep]) -> bool {
        if self.status != StepStatus::Pending {
            return false;
        }

        steps
            .iter()
            .filter(|s| s.project_id == self.project_id)
            .filter(|s| matches!(s.status, StepStatus::Pending | StepStatus::Active))
            .map(|s| s.order_index)
            .min()
            .is_some_and(|lowest| lowest == self.order_index)
    }

    /// True only when the step is active and `action` is legal for its type.
    pub fn is_resolvable(&self, action: Action) -> bool {
        self.status == StepStatus::Active && rules::is_legal(self.step_type, action)
    }

    /// Look up an option by key.
    pub fn option(&self, key: &str) -> Option<&StepOption> {
        self.options.iter().find(|o| o.key == key)
    }
}

/// A step about to be inserted by the seed generator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStep {
    pub agent: Agent,
    pub phase: Phase,
    pub title: String,
    pub body: String,
    pub step_type: StepType,
    pub options: Vec<StepOption>,
    pub effect: Option<StepEffect>,
}
