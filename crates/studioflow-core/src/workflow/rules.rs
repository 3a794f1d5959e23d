//! Legality table mapping each step type to its actions and required payload.
//!
//! Adding a step type means adding a row here; the resolution engine reads the
//! table instead of branching on types.

use crate::models::{Action, StepType};

/// What a resolution payload must carry for a given step type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Non-empty `input_text`
    InputText,
    /// `chosen_option` naming exactly one option key
    OptionKey,
    /// `chosen_option` holding a key set; may be empty when `input_text`
    /// supplies custom entries
    KeySet,
    /// `chosen_option` naming the option keyed by the action itself; derived
    /// from the action when omitted
    ActionKey,
    /// No option may be supplied
    Nothing,
}

/// One row of the legality table.
#[derive(Debug, Clone, Copy)]
pub struct ActionRule {
    pub step_type: StepType,
    pub actions: &'static [Action],
    pub requirement: Requirement,
}

pub const RULES: &[ActionRule] = &[
    ActionRule {
        step_type: StepType::InputNeeded,
        actions: &[Action::Input],
        requirement: Requirement::InputText,
    },
    ActionRule {
        step_type: StepType::DecisionGate,
        actions: &[Action::Choose],
        requirement: Requirement::OptionKey,
    },
    ActionRule {
        step_type: StepType::DeliverableSelection,
        actions: &[Action::Choose],
        requirement: Requirement::KeySet,
    },
    ActionRule {
        step_type: StepType::ApprovalGate,
        actions: &[Action::Approve, Action::Reject],
        requirement: Requirement::ActionKey,
    },
    ActionRule {
        step_type: StepType::AgentOutput,
        actions: &[Action::Acknowledge],
        requirement: Requirement::Nothing,
    },
];

/// Find the rule row for a step type.
pub fn rule_for(step_type: StepType) -> Option<&'static ActionRule> {
    RULES.iter().find(|rule| rule.step_type == step_type)
}

/// Whether `action` is in the legal set for `step_type`.
pub fn is_legal(step_type: StepType, action: Action) -> bool {
    rule_for(step_type).is_some_and(|rule| rule.actions.contains(&action))
}

/// Legal actions for a step type, for error messages and help output.
pub fn legal_actions(step_type: StepType) -> &'static [Action] {
    rule_for(step_type).map_or(&[], |rule| rule.actions)
}
