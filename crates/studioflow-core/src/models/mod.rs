//! Data models for projects, workflow steps and deliverables.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays separate from the data
//! structures.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use studioflow_core::models::{Agent, Phase, StepStatus, StepType, WorkflowStep};
//!
//! let step = WorkflowStep {
//!     id: 1,
//!     project_id: 1,
//!     order_index: 0,
//!     agent: Agent::Strategist,
//!     phase: Phase::Strategy,
//!     title: "Project Brief".to_string(),
//!     body: "Describe the project.".to_string(),
//!     step_type: StepType::InputNeeded,
//!     options: vec![],
//!     status: StepStatus::Active,
//! #   chosen_option: None,
//! #   input_text: None,
//! #   effect: None,
//! #   created_at: Timestamp::now(),
//! #   resolved_at: None,
//! };
//! println!("{}", step); // Shows ➤ Active status icon
//! ```

pub mod action;
pub mod kinds;
pub mod project;
pub mod status;
pub mod step;


pub use action::{Action, Resolution};
pub use kinds::{Agent, DeliverableOwner, Phase, ProjectCategory, StepEffect, StepType};
pub use project::{Deliverable, NewDeliverable, Project};
pub use status::{ProjectStage, ReviewStatus, StepStatus};
pub use step::{NewStep, StepOption, WorkflowStep};
