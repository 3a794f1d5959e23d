//! Canonical step sequence for a freshly seeded project.

use super::templates::{self, CatalogItem};
use crate::models::{Agent, NewStep, Phase, Project, StepEffect, StepOption, StepType};

/// Build the ordered step sequence for `project`.
///
/// The result depends only on the project's category, name and budget cap.
/// The first element becomes the active step when inserted.
pub fn canonical_steps(project: &Project) -> Vec<NewStep> {
    let budget = project.effective_budget();
    let catalog = preselect(templates::catalog(project.category), budget);
    let deliverables_body = templates::deliverables_body(&catalog, budget);

    vec![
        NewStep {
            agent: Agent::Strategist,
            phase: Phase::Strategy,
            title: "Project Brief".to_string(),
            body: templates::brief_body(project),
            step_type: StepType::InputNeeded,
            options: Vec::new(),
            effect: Some(StepEffect::RecordBrief),
        },
        NewStep {
            agent: Agent::Strategist,
            phase: Phase::Strategy,
            title: "Strategic Direction".to_string(),
            body: templates::direction_body(project),
            step_type: StepType::DecisionGate,
            options: templates::directions(project.category),
            effect: Some(StepEffect::AdoptDirection),
        },
        NewStep {
            agent: Agent::Strategist,
            phase: Phase::Strategy,
            title: "Strategy Review".to_string(),
            body: templates::strategy_review_body(project),
            step_type: StepType::ApprovalGate,
            options: templates::approval_options(
                "Approve & proceed to planning",
                "Request revisions",
            ),
            effect: None,
        },
        NewStep {
            agent: Agent::Director,
            phase: Phase::Design,
            title: "Deliverable Selection".to_string(),
            body: deliverables_body,
            step_type: StepType::DeliverableSelection,
            options: catalog,
            effect: Some(StepEffect::CommitDeliverables),
        },
        NewStep {
            agent: Agent::Designer,
            phase: Phase::Design,
            title: "Visual Direction".to_string(),
            body: templates::visual_direction_body(project),
            step_type: StepType::ApprovalGate,
            options: templates::approval_options(
                "Approve visual direction",
                "Request another round",
            ),
            effect: None,
        },
        NewStep {
            agent: Agent::Designer,
            phase: Phase::Production,
            title: "Production Kickoff".to_string(),
            body: templates::production_body(project),
            step_type: StepType::AgentOutput,
            options: Vec::new(),
            effect: None,
        },
        NewStep {
            agent: Agent::Cfo,
            phase: Phase::Governance,
            title: "Budget Allocation".to_string(),
            body: templates::budget_placeholder_body(),
            step_type: StepType::AgentOutput,
            options: Vec::new(),
            effect: None,
        },
    ]
}

/// Turn catalog items into options, preselecting what fits the budget.
///
/// Without a budget every item is preselected. With one, items are taken in
/// catalog order while the running total stays within the cap.
pub fn preselect(items: &[CatalogItem], budget: Option<u64>) -> Vec<StepOption> {
    let mut running_total = 0u64;
    items
        .iter()
        .map(|item| {
            let selected = match budget {
                None => true,
                Some(cap) if running_total + item.cost <= cap => {
                    running_total += item.cost;
                    true
                }
                Some(_) => false,
            };
            let mut option = item.to_option();
            option.selected = Some(selected);
            option
        })
        .collect()
}
