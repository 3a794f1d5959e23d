//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can render it with termimad and the MCP
//! server can hand it to clients verbatim.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        Action, Agent, Deliverable, DeliverableOwner, Phase, Project, ProjectCategory,
        ProjectStage, ReviewStatus, StepStatus, StepType, WorkflowStep,
    },
    workflow::{rules, templates::dollars},
};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    StepStatus,
    ProjectStage,
    ReviewStatus,
    Phase,
    StepType,
    Action,
    ProjectCategory,
    DeliverableOwner,
);

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Stage: {}", self.stage)?;
        match self.effective_budget() {
            Some(budget) => writeln!(f, "- Budget: {}", dollars(budget as i64))?,
            None => writeln!(f, "- Budget: not set")?,
        }
        if let Some(review) = &self.review_status {
            writeln!(f, "- Review: {review}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(brief) = &self.client_brief {
            writeln!(f, "\n## Brief")?;
            writeln!(f)?;
            writeln!(f, "{brief}")?;
        }

        if let Some(summary) = &self.executive_summary {
            writeln!(f, "\n## Direction")?;
            writeln!(f)?;
            writeln!(f, "{summary}")?;
        }

        if self.steps.is_empty() {
            writeln!(f, "\nWorkflow not started.")?;
        } else {
            writeln!(f, "\n## Workflow")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl WorkflowStep {
    fn fmt_options(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### Options")?;
        writeln!(f)?;
        for option in &self.options {
            let mark = match (self.step_type, option.selected) {
                (StepType::DeliverableSelection, Some(true)) => "[x] ",
                (StepType::DeliverableSelection, _) => "[ ] ",
                _ => "",
            };
            write!(f, "- {mark}**{}** {}", option.key, option.title)?;
            if let Some(cost) = option.cost {
                write!(f, " ({})", dollars(cost as i64))?;
            }
            if let Some(description) = &option.description {
                write!(f, ": {description}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} · {} · {}",
            self.agent, self.phase, self.step_type
        )?;

        if self.status == StepStatus::Active {
            let actions: Vec<&str> = rules::legal_actions(self.step_type)
                .iter()
                .map(Action::as_str)
                .collect();
            writeln!(f, "- Actions: {}", actions.join(", "))?;
        }
        writeln!(f)?;

        if !self.body.is_empty() {
            writeln!(f, "{}", self.body)?;
            writeln!(f)?;
        }

        if !self.options.is_empty() && self.status != StepStatus::Pending {
            self.fmt_options(f)?;
        }

        if self.status == StepStatus::Resolved {
            writeln!(f, "#### Resolution")?;
            writeln!(f)?;
            if let Some(choice) = &self.chosen_option {
                writeln!(f, "- Choice: {choice}")?;
            }
            if let Some(input) = &self.input_text {
                writeln!(f, "- Input: {input}")?;
            }
            if let Some(resolved_at) = &self.resolved_at {
                writeln!(f, "- Resolved: {}", LocalDateTime(resolved_at))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Deliverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} | {} | ", self.id, self.title)?;
        match self.owner {
            DeliverableOwner::Founder => write!(f, "custom")?,
            DeliverableOwner::Agent => write!(f, "{}", dollars(self.cost as i64))?,
        }
        writeln!(
            f,
            " | {} | {} |",
            self.phase.as_deref().unwrap_or("-"),
            self.owner
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::StepOption;

    fn gate(status: StepStatus) -> WorkflowStep {
        WorkflowStep {
            id: 3,
            project_id: 1,
            order_index: 2,
            agent: Agent::Strategist,
            phase: Phase::Strategy,
            title: "Strategy Review".to_string(),
            body: "Review the direction.".to_string(),
            step_type: StepType::ApprovalGate,
            options: vec![
                StepOption::new("approve", "Approve"),
                StepOption::new("reject", "Request revisions"),
            ],
            status,
            chosen_option: None,
            input_text: None,
            effect: None,
            created_at: Timestamp::now(),
            resolved_at: None,
        }
    }

    #[test]
    fn test_active_step_lists_actions_and_options() {
        let rendered = gate(StepStatus::Active).to_string();
        assert!(rendered.contains("### 3. Strategy Review (➤ Active)"));
        assert!(rendered.contains("- Actions: approve, reject"));
        assert!(rendered.contains("**reject** Request revisions"));
    }

    #[test]
    fn test_resolved_step_shows_resolution() {
        let mut step = gate(StepStatus::Resolved);
        step.chosen_option = Some("approve".to_string());
        step.resolved_at = Some(Timestamp::now());
        let rendered = step.to_string();
        assert!(rendered.contains("#### Resolution"));
        assert!(rendered.contains("- Choice: approve"));
        assert!(!rendered.contains("Actions:"));
    }

    #[test]
    fn test_custom_deliverable_shows_no_cost() {
        let deliverable = Deliverable {
            id: 7,
            project_id: 1,
            title: "Packaging Design".to_string(),
            catalog_key: None,
            cost: 0,
            phase: None,
            owner: DeliverableOwner::Founder,
            created_at: Timestamp::now(),
        };
        assert_eq!(
            deliverable.to_string(),
            "| 7 | Packaging Design | custom | - | founder |\n"
        );
    }
}
