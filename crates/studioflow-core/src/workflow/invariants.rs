//! Structural invariants checked on every workflow mutation.

use crate::{
    error::{Result, StudioError},
    models::{StepStatus, WorkflowStep},
};

/// Verify a project's step list, ordered by `order_index`.
///
/// - `order_index` runs 0, 1, 2, ... with no gaps or duplicates
/// - at most one step is active; exactly one while any step is unresolved
/// - everything before the active step is resolved, everything after pending
pub fn check(project_id: u64, steps: &[WorkflowStep]) -> Result<()> {
    let violation = |reason: String| StudioError::Invariant { project_id, reason };

    for (expected, step) in steps.iter().enumerate() {
        if step.project_id != project_id {
            return Err(violation(format!(
                "step {} belongs to project {}",
                step.id, step.project_id
            )));
        }
        if step.order_index as usize != expected {
            return Err(violation(format!(
                "step {} has order_index {} where {expected} was expected",
                step.id, step.order_index
            )));
        }
    }

    let active: Vec<&WorkflowStep> = steps
        .iter()
        .filter(|s| s.status == StepStatus::Active)
        .collect();
    let unresolved = steps.iter().any(|s| s.status != StepStatus::Resolved);

    match active.as_slice() {
        [] if unresolved => Err(violation(
            "unresolved steps remain but none is active".to_string(),
        )),
        [] => Ok(()),
        [current] => {
            let out_of_place = steps.iter().find(|s| {
                (s.order_index < current.order_index && s.status != StepStatus::Resolved)
                    || (s.order_index > current.order_index && s.status != StepStatus::Pending)
            });
            match out_of_place {
                Some(step) => Err(violation(format!(
                    "step {} is {} relative to active step {}",
                    step.id,
                    step.status.as_str(),
                    current.id
                ))),
                None => Ok(()),
            }
        }
        many => Err(violation(format!("{} steps are active", many.len()))),
    }
}
