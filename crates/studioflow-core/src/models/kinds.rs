//! Enumerated roles, phases and step variants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role that originates a step. Used for display and routing only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Strategist,
    Director,
    Designer,
    Cfo,
}

impl FromStr for Agent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategist" => Ok(Agent::Strategist),
            "director" => Ok(Agent::Director),
            "designer" => Ok(Agent::Designer),
            "cfo" => Ok(Agent::Cfo),
            _ => Err(format!("Invalid agent: {s}")),
        }
    }
}

impl Agent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Strategist => "strategist",
            Agent::Director => "director",
            Agent::Designer => "designer",
            Agent::Cfo => "cfo",
        }
    }

    /// Human-facing role name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Agent::Strategist => "Strategist",
            Agent::Director => "Director",
            Agent::Designer => "Designer",
            Agent::Cfo => "CFO",
        }
    }
}

/// Informational grouping label of a step. Never gates transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Strategy,
    Design,
    Production,
    Governance,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strategy" => Ok(Phase::Strategy),
            "design" => Ok(Phase::Design),
            "production" => Ok(Phase::Production),
            "governance" => Ok(Phase::Governance),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Strategy => "strategy",
            Phase::Design => "design",
            Phase::Production => "production",
            Phase::Governance => "governance",
        }
    }
}

/// The kind of gate a step represents.
///
/// Determines which actions are legal and what the step's options mean; see
/// [`crate::workflow::rules`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Free-text answer required
    InputNeeded,
    /// Pick exactly one option
    DecisionGate,
    /// Pick any number of cost-bearing catalog items, plus custom entries
    DeliverableSelection,
    /// Approve or reject
    ApprovalGate,
    /// Informational output that only needs acknowledging
    AgentOutput,
}

impl FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input_needed" => Ok(StepType::InputNeeded),
            "decision_gate" => Ok(StepType::DecisionGate),
            "deliverable_selection" => Ok(StepType::DeliverableSelection),
            "approval_gate" => Ok(StepType::ApprovalGate),
            "agent_output" => Ok(StepType::AgentOutput),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

impl StepType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::InputNeeded => "input_needed",
            StepType::DecisionGate => "decision_gate",
            StepType::DeliverableSelection => "deliverable_selection",
            StepType::ApprovalGate => "approval_gate",
            StepType::AgentOutput => "agent_output",
        }
    }

    /// Whether the step carries a meaningful option list.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            StepType::DecisionGate | StepType::DeliverableSelection | StepType::ApprovalGate
        )
    }
}

/// Project-level side effect applied when a step resolves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepEffect {
    /// Store the input text as the project's client brief
    RecordBrief,
    /// Store the chosen direction as the project's executive summary
    AdoptDirection,
    /// Persist the selected deliverables and refresh the budget summary
    CommitDeliverables,
}

impl FromStr for StepEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "record_brief" => Ok(StepEffect::RecordBrief),
            "adopt_direction" => Ok(StepEffect::AdoptDirection),
            "commit_deliverables" => Ok(StepEffect::CommitDeliverables),
            _ => Err(format!("Invalid step effect: {s}")),
        }
    }
}

impl StepEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepEffect::RecordBrief => "record_brief",
            StepEffect::AdoptDirection => "adopt_direction",
            StepEffect::CommitDeliverables => "commit_deliverables",
        }
    }
}

/// Declared type of a project; selects the direction set and catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    Brand,
    Digital,
    Campaign,
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brand" => Ok(ProjectCategory::Brand),
            "digital" => Ok(ProjectCategory::Digital),
            "campaign" => Ok(ProjectCategory::Campaign),
            _ => Err(format!(
                "Invalid project category: {s} (expected brand, digital or campaign)"
            )),
        }
    }
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Brand => "brand",
            ProjectCategory::Digital => "digital",
            ProjectCategory::Campaign => "campaign",
        }
    }
}

/// Who originated a deliverable record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliverableOwner {
    /// Picked from the agent-proposed catalog
    Agent,
    /// Typed in as a custom entry
    Founder,
}

impl FromStr for DeliverableOwner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agent" => Ok(DeliverableOwner::Agent),
            "founder" => Ok(DeliverableOwner::Founder),
            _ => Err(format!("Invalid deliverable owner: {s}")),
        }
    }
}

impl DeliverableOwner {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableOwner::Agent => "agent",
            DeliverableOwner::Founder => "founder",
        }
    }
}
