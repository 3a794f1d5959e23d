//! Workflow rules: seeding, legality, resolution planning and invariants.
//!
//! Everything in this module is pure. Persistence lives in [`crate::db`],
//! concurrency control in [`crate::studio`].

pub mod invariants;
pub mod resolve;
pub mod rules;
pub mod seed;
pub mod templates;

pub use resolve::{plan, ProjectChanges, ResolutionPlan};
pub use seed::canonical_steps;
