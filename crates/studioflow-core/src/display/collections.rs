//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::{
    models::{Deliverable, DeliverableOwner, Project, StepStatus, WorkflowStep},
    workflow::templates::dollars,
};

macro_rules! collection {
    ($name:ident, $item:ty) => {
        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Projects in list form: one short section per project.
///
/// ```rust
/// use jiff::Timestamp;
/// use studioflow_core::{
///     display::Projects,
///     models::{Project, ProjectCategory, ProjectStage},
/// };
///
/// let project = Project {
///     id: 1,
///     name: "Northwind Rebrand".to_string(),
///     category: ProjectCategory::Brand,
///     budget_cap: Some(5000),
///     stage: ProjectStage::Strategy,
///     client_brief: None,
///     executive_summary: None,
///     review_status: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     steps: vec![],
/// };
/// let output = Projects(vec![project]).to_string();
/// assert!(output.contains("## Northwind Rebrand (ID: 1)"));
/// assert!(output.contains("$5,000"));
/// ```
pub struct Projects(pub Vec<Project>);

collection!(Projects, Project);

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No projects found.");
        }
        for project in &self.0 {
            writeln!(f, "## {} (ID: {})", project.name, project.id)?;
            writeln!(f)?;
            writeln!(f, "- **Category**: {}", project.category)?;
            writeln!(f, "- **Stage**: {}", project.stage)?;
            if let Some(budget) = project.effective_budget() {
                writeln!(f, "- **Budget**: {}", dollars(budget as i64))?;
            }
            writeln!(f, "- **Created**: {}", LocalDateTime(&project.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A project's workflow steps in order, with a progress header.
pub struct Steps(pub Vec<WorkflowStep>);

collection!(Steps, WorkflowStep);

impl Steps {
    /// The step currently accepting a resolution.
    pub fn active(&self) -> Option<&WorkflowStep> {
        self.0.iter().find(|s| s.status == StepStatus::Active)
    }

    /// Whether every step is resolved.
    pub fn is_complete(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|s| s.status == StepStatus::Resolved)
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps found.");
        }

        let resolved = self
            .0
            .iter()
            .filter(|s| s.status == StepStatus::Resolved)
            .count();
        writeln!(f, "Progress: {resolved}/{} resolved", self.0.len())?;
        writeln!(f)?;

        for step in &self.0 {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Deliverables as a markdown table with a committed-cost footer.
pub struct Deliverables(pub Vec<Deliverable>);

collection!(Deliverables, Deliverable);

impl Deliverables {
    /// Sum of catalog costs; custom entries count as zero.
    pub fn total_cost(&self) -> u64 {
        self.0.iter().map(|d| d.cost).sum()
    }
}

impl fmt::Display for Deliverables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No deliverables found.");
        }

        writeln!(f, "| ID | Deliverable | Cost | Phase | Owner |")?;
        writeln!(f, "|---|---|---|---|---|")?;
        for deliverable in &self.0 {
            write!(f, "{deliverable}")?;
        }
        writeln!(f)?;

        let custom = self
            .0
            .iter()
            .filter(|d| d.owner == DeliverableOwner::Founder)
            .count();
        write!(f, "Total: {}", dollars(self.total_cost() as i64))?;
        if custom > 0 {
            write!(f, " (+{custom} custom)")?;
        }
        writeln!(f)
    }
}
