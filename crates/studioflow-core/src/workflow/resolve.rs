//! Validation and planning of a step resolution.
//!
//! [`plan`] is pure: it inspects the project and its steps, rejects illegal
//! resolutions, and describes every mutation a legal one implies. The
//! database layer applies the returned [`ResolutionPlan`] inside a single
//! transaction.

use super::{
    rules::{self, Requirement},
    templates,
};
use crate::{
    error::{Result, StudioError},
    models::{
        Action, Agent, DeliverableOwner, NewDeliverable, Project, ProjectStage, Resolution,
        ReviewStatus, StepEffect, StepOption, StepStatus, StepType, WorkflowStep,
    },
};

/// Project fields touched by a resolution. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub stage: Option<ProjectStage>,
    pub client_brief: Option<String>,
    pub executive_summary: Option<String>,
    pub review_status: Option<ReviewStatus>,
}

/// Every mutation implied by a validated resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionPlan {
    pub project_id: u64,
    pub step_id: u64,
    pub chosen_option: Option<String>,
    pub input_text: Option<String>,
    /// Options with `selected` flags reflecting the final choice
    pub options: Vec<StepOption>,
    /// Pending step to activate; `None` completes the workflow
    pub next_step_id: Option<u64>,
    pub deliverables: Vec<NewDeliverable>,
    /// Body rewrites for not-yet-active steps, as `(step_id, body)`
    pub body_updates: Vec<(u64, String)>,
    pub project: ProjectChanges,
}

/// Validated payload, normalized per the step's [`Requirement`].
struct Accepted {
    action: Action,
    chosen_option: Option<String>,
    input_text: Option<String>,
    keys: Vec<String>,
    custom: Vec<String>,
}

/// Validate `resolution` against `step_id` and describe its effects.
///
/// Checks run in order: ownership (`NotFound`), status (`InvalidState`),
/// action and payload (`InvalidAction`). Nothing is mutated.
pub fn plan(
    project: &Project,
    steps: &[WorkflowStep],
    step_id: u64,
    resolution: &Resolution,
) -> Result<ResolutionPlan> {
    let step = steps
        .iter()
        .find(|s| s.id == step_id && s.project_id == project.id)
        .ok_or(StudioError::StepNotFound {
            project_id: project.id,
            step_id,
        })?;

    match step.status {
        StepStatus::Active => {}
        StepStatus::Pending => {
            return Err(StudioError::InvalidState {
                step_id,
                reason: "step is pending; earlier steps must be resolved first".to_string(),
            });
        }
        StepStatus::Resolved => {
            return Err(StudioError::InvalidState {
                step_id,
                reason: "step is already resolved".to_string(),
            });
        }
    }

    let accepted = accept(step, resolution)?;

    let next = steps
        .iter()
        .filter(|s| s.status == StepStatus::Pending && s.id != step.id)
        .min_by_key(|s| s.order_index);

    let mut options = step.options.clone();
    if step.step_type == StepType::DeliverableSelection {
        for option in &mut options {
            option.selected = Some(accepted.keys.contains(&option.key));
        }
    }

    let deliverables = if step.step_type == StepType::DeliverableSelection {
        deliverables_for(&options, &accepted)
    } else {
        Vec::new()
    };

    let mut project_changes = ProjectChanges {
        stage: Some(next.map_or(ProjectStage::Complete, |s| s.phase.into())),
        ..Default::default()
    };
    let mut body_updates = Vec::new();

    if step.step_type == StepType::ApprovalGate {
        project_changes.review_status = Some(match accepted.action {
            Action::Reject => ReviewStatus::Rejected,
            _ => ReviewStatus::Approved,
        });
    }

    match step.effect {
        Some(StepEffect::RecordBrief) => {
            project_changes.client_brief = accepted.input_text.clone();
        }
        Some(StepEffect::AdoptDirection) => {
            project_changes.executive_summary = accepted
                .chosen_option
                .as_deref()
                .and_then(|key| step.option(key))
                .map(|option| match &option.description {
                    Some(description) => format!("{}: {description}", option.title),
                    None => option.title.clone(),
                });
        }
        Some(StepEffect::CommitDeliverables) => {
            let budget_step = steps.iter().find(|s| {
                s.status == StepStatus::Pending
                    && s.order_index > step.order_index
                    && s.agent == Agent::Cfo
                    && s.step_type == StepType::AgentOutput
            });
            if let Some(budget_step) = budget_step {
                let items: Vec<(String, Option<u64>)> = deliverables
                    .iter()
                    .map(|d| match d.owner {
                        DeliverableOwner::Agent => (d.title.clone(), Some(d.cost)),
                        DeliverableOwner::Founder => (d.title.clone(), None),
                    })
                    .collect();
                body_updates.push((
                    budget_step.id,
                    templates::budget_summary_body(&items, project.effective_budget()),
                ));
            }
        }
        None => {}
    }

    Ok(ResolutionPlan {
        project_id: project.id,
        step_id: step.id,
        chosen_option: accepted.chosen_option,
        input_text: accepted.input_text,
        options,
        next_step_id: next.map(|s| s.id),
        deliverables,
        body_updates,
        project: project_changes,
    })
}

/// Check the action and payload against the legality table.
fn accept(step: &WorkflowStep, resolution: &Resolution) -> Result<Accepted> {
    let reject = |reason: String| {
        StudioError::invalid_action(step.id, resolution.action.as_str()).with_reason(reason)
    };
    let action = resolution.parsed_action().map_err(reject)?;

    let rule = rules::rule_for(step.step_type).ok_or_else(|| {
        reject(format!("no actions are defined for {} steps", step.step_type.as_str()))
    })?;

    if !rule.actions.contains(&action) {
        let legal: Vec<&str> = rule.actions.iter().map(Action::as_str).collect();
        return Err(reject(format!(
            "{} steps accept: {}",
            step.step_type.as_str(),
            legal.join(", ")
        )));
    }

    let note = resolution.input().map(String::from);

    match rule.requirement {
        Requirement::InputText => {
            let text = note.ok_or_else(|| reject("input_text must not be empty".to_string()))?;
            Ok(Accepted {
                action,
                chosen_option: None,
                input_text: Some(text),
                keys: Vec::new(),
                custom: Vec::new(),
            })
        }
        Requirement::OptionKey => {
            let key = resolution
                .option()
                .ok_or_else(|| reject("chosen_option must name one option".to_string()))?;
            if step.option(key).is_none() {
                return Err(reject(format!("unknown option '{key}'")));
            }
            Ok(Accepted {
                action,
                chosen_option: Some(key.to_string()),
                input_text: note,
                keys: Vec::new(),
                custom: Vec::new(),
            })
        }
        Requirement::ActionKey => {
            let key = resolution.option().unwrap_or(action.as_str());
            if key != action.as_str() {
                return Err(reject(format!(
                    "option '{key}' contradicts action '{}'",
                    action.as_str()
                )));
            }
            if step.option(key).is_none() {
                return Err(reject(format!("unknown option '{key}'")));
            }
            Ok(Accepted {
                action,
                chosen_option: Some(key.to_string()),
                input_text: note,
                keys: Vec::new(),
                custom: Vec::new(),
            })
        }
        Requirement::KeySet => {
            let keys = match resolution.option() {
                Some(raw) => parse_key_set(raw).map_err(reject)?,
                None => Vec::new(),
            };
            if let Some(unknown) = keys.iter().find(|k| step.option(k).is_none()) {
                return Err(reject(format!("unknown deliverable '{unknown}'")));
            }
            let custom = note.as_deref().map(split_custom).unwrap_or_default();
            if keys.is_empty() && custom.is_empty() {
                return Err(reject(
                    "select at least one deliverable or enter a custom item".to_string(),
                ));
            }
            Ok(Accepted {
                action,
                chosen_option: Some(serde_json::to_string(&keys)?),
                input_text: note,
                keys,
                custom,
            })
        }
        Requirement::Nothing => {
            if let Some(key) = resolution.option() {
                return Err(reject(format!(
                    "{} steps take no option, got '{key}'",
                    step.step_type.as_str()
                )));
            }
            Ok(Accepted {
                action,
                chosen_option: None,
                input_text: note,
                keys: Vec::new(),
                custom: Vec::new(),
            })
        }
    }
}

/// Parse a serialized key set: a JSON string array or a comma-separated list.
/// Duplicates are dropped, first occurrence wins.
pub fn parse_key_set(raw: &str) -> std::result::Result<Vec<String>, String> {
    let raw = raw.trim();
    let parsed: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw)
            .map_err(|e| format!("chosen_option is not a JSON key array: {e}"))?
    } else {
        raw.split(',').map(String::from).collect()
    };

    let mut keys: Vec<String> = Vec::with_capacity(parsed.len());
    for key in parsed {
        let key = key.trim();
        if !key.is_empty() && !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    Ok(keys)
}

fn split_custom(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Catalog deliverables in catalog order, then custom entries in input order.
fn deliverables_for(options: &[StepOption], accepted: &Accepted) -> Vec<NewDeliverable> {
    let from_catalog = options.iter().filter(|o| o.is_selected()).map(|o| NewDeliverable {
        title: o.title.clone(),
        catalog_key: Some(o.key.clone()),
        cost: o.cost.unwrap_or(0),
        phase: o.phase.clone(),
        owner: DeliverableOwner::Agent,
    });

    let custom = accepted.custom.iter().map(|title| NewDeliverable {
        title: title.clone(),
        catalog_key: None,
        cost: 0,
        phase: None,
        owner: DeliverableOwner::Founder,
    });

    from_catalog.chain(custom).collect()
}
