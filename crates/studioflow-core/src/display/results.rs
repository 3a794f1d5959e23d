//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::collections::Steps;
use crate::models::Project;

/// Banner plus the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created project with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Confirmation of a deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted project '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

/// Outcome of resolving a step: what was closed and what is now open.
pub struct ResolveResult {
    pub step_id: u64,
    pub steps: Steps,
}

impl ResolveResult {
    pub fn new(step_id: u64, steps: Steps) -> Self {
        Self { step_id, steps }
    }
}

impl fmt::Display for ResolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolved step {}", self.step_id)?;
        writeln!(f)?;
        match self.steps.active() {
            Some(next) => {
                writeln!(f, "## Next")?;
                writeln!(f)?;
                write!(f, "{next}")
            }
            None => writeln!(f, "Workflow complete."),
        }
    }
}
