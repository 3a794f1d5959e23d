//! Resolution actions and their payload.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An action submitted to close the active step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Input,
    Choose,
    Approve,
    Reject,
    Acknowledge,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" => Ok(Action::Input),
            "choose" => Ok(Action::Choose),
            "approve" => Ok(Action::Approve),
            "reject" => Ok(Action::Reject),
            "acknowledge" | "ack" => Ok(Action::Acknowledge),
            _ => Err(format!("Invalid action: {s}")),
        }
    }
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Input => "input",
            Action::Choose => "choose",
            Action::Approve => "approve",
            Action::Reject => "reject",
            Action::Acknowledge => "acknowledge",
        }
    }
}

/// Payload accompanying an [`Action`].
///
/// The action is kept as submitted and parsed only once the target step has
/// been found active, so an unknown step or a closed step is reported before
/// a malformed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub action: String,
    /// Option key, or a serialized key set for deliverable selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_option: Option<String>,
    /// Free text; the answer for input steps, a note otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
}

impl Resolution {
    pub fn new(action: Action) -> Self {
        Self::named(action.as_str())
    }

    /// A resolution carrying an action name exactly as a caller sent it.
    pub fn named(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            chosen_option: None,
            input_text: None,
        }
    }

    /// Parse the submitted action name.
    pub fn parsed_action(&self) -> Result<Action, String> {
        self.action.parse()
    }

    pub fn with_option(mut self, key: impl Into<String>) -> Self {
        self.chosen_option = Some(key.into());
        self
    }

    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input_text = Some(text.into());
        self
    }

    /// Chosen option with surrounding whitespace removed; `None` when blank.
    pub fn option(&self) -> Option<&str> {
        self.chosen_option
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Input text with surrounding whitespace removed; `None` when blank.
    pub fn input(&self) -> Option<&str> {
        self.input_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
