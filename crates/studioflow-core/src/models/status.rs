//! Status enumerations for workflow steps and projects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Phase;

/// Lifecycle state of a workflow step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Waiting for every earlier step to resolve
    Pending,

    /// The single step currently accepting a resolution
    Active,

    /// Closed; its choice and input are history
    Resolved,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "active" => Ok(StepStatus::Active),
            "resolved" => Ok(StepStatus::Resolved),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Active => "active",
            StepStatus::Resolved => "resolved",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use studioflow_core::models::StepStatus;
    ///
    /// assert_eq!(StepStatus::Resolved.with_icon(), "✓ Resolved");
    /// assert_eq!(StepStatus::Active.with_icon(), "➤ Active");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Resolved => "✓ Resolved",
            StepStatus::Active => "➤ Active",
            StepStatus::Pending => "○ Pending",
        }
    }
}

/// Coarse progress marker of a project, driven by its workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStage {
    /// No workflow has been seeded yet
    #[default]
    Intake,
    Strategy,
    Design,
    Production,
    Governance,
    /// Every workflow step is resolved
    Complete,
}

impl FromStr for ProjectStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intake" => Ok(ProjectStage::Intake),
            "strategy" => Ok(ProjectStage::Strategy),
            "design" => Ok(ProjectStage::Design),
            "production" => Ok(ProjectStage::Production),
            "governance" => Ok(ProjectStage::Governance),
            "complete" => Ok(ProjectStage::Complete),
            _ => Err(format!("Invalid project stage: {s}")),
        }
    }
}

impl ProjectStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStage::Intake => "intake",
            ProjectStage::Strategy => "strategy",
            ProjectStage::Design => "design",
            ProjectStage::Production => "production",
            ProjectStage::Governance => "governance",
            ProjectStage::Complete => "complete",
        }
    }
}

impl From<Phase> for ProjectStage {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Strategy => ProjectStage::Strategy,
            Phase::Design => ProjectStage::Design,
            Phase::Production => ProjectStage::Production,
            Phase::Governance => ProjectStage::Governance,
        }
    }
}

/// Outcome of the most recent approval gate on a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Rejected,
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}
