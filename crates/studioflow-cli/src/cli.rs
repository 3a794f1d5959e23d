//! Command-line subcommands and their handlers.
//!
//! Each argument struct is a clap wrapper around a core parameter type from
//! [`studioflow_core::params`], converted with `From`. Validation beyond
//! argument parsing happens in the core so the CLI and the MCP server reject
//! the same inputs in the same way.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use studioflow_core::{
    display::{OperationStatus, Steps},
    params::{CreateProject, Id, ProjectId, ResolveStep},
    Studio, StudioError,
};

use crate::renderer::TerminalRenderer;

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Name of the project
    pub name: String,
    /// Project category; selects directions and the deliverable catalog
    #[arg(short, long, value_enum, default_value_t = CategoryArg::Brand)]
    pub category: CategoryArg,
    /// Budget cap in whole dollars
    #[arg(short, long, help = "Budget cap in whole dollars (0 or omitted means none)")]
    pub budget: Option<u64>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            category: Some(val.category.as_str().to_string()),
            budget_cap: val.budget,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    Brand,
    Digital,
    Campaign,
}

impl CategoryArg {
    fn as_str(self) -> &'static str {
        match self {
            CategoryArg::Brand => "brand",
            CategoryArg::Digital => "digital",
            CategoryArg::Campaign => "campaign",
        }
    }
}

/// Identify a project by ID
#[derive(Args)]
pub struct ProjectIdArgs {
    #[arg(help = "Unique identifier of the project")]
    pub id: u64,
}

impl From<ProjectIdArgs> for Id {
    fn from(val: ProjectIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show a project's workflow
#[derive(Args)]
pub struct WorkflowArgs {
    #[arg(help = "Unique identifier of the project")]
    pub project_id: u64,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&WorkflowArgs> for ProjectId {
    fn from(val: &WorkflowArgs) -> Self {
        ProjectId {
            project_id: val.project_id,
        }
    }
}

/// Resolve the active step of a project
#[derive(Args)]
pub struct ResolveStepArgs {
    #[arg(help = "Unique identifier of the project")]
    pub project_id: u64,
    #[arg(help = "Unique identifier of the active step")]
    pub step_id: u64,
    #[arg(value_enum, help = "Resolution action")]
    pub action: ActionArg,
    /// Option key; for deliverable selection a JSON array or comma list of
    /// keys
    #[arg(short, long)]
    pub option: Option<String>,
    /// Free text: the brief, custom deliverables, or a note
    #[arg(short, long)]
    pub input: Option<String>,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ResolveStepArgs> for ResolveStep {
    fn from(val: &ResolveStepArgs) -> Self {
        ResolveStep {
            project_id: val.project_id,
            step_id: val.step_id,
            action: val.action.as_str().to_string(),
            chosen_option: val.option.clone(),
            input_text: val.input.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ActionArg {
    Input,
    Choose,
    Approve,
    Reject,
    #[value(alias = "ack")]
    Acknowledge,
}

impl ActionArg {
    fn as_str(self) -> &'static str {
        match self {
            ActionArg::Input => "input",
            ActionArg::Choose => "choose",
            ActionArg::Approve => "approve",
            ActionArg::Reject => "reject",
            ActionArg::Acknowledge => "acknowledge",
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    Create(CreateProjectArgs),
    /// List all projects
    List,
    /// Show a project with its workflow
    Show(ProjectIdArgs),
    /// Delete a project with its steps and deliverables
    Delete(ProjectIdArgs),
}

#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// Show every step of a project's workflow, seeding it if needed
    Show(WorkflowArgs),
    /// Show the step currently waiting for a resolution
    Active(WorkflowArgs),
    /// Resolve the active step
    Resolve(ResolveStepArgs),
}

#[derive(Subcommand)]
pub enum DeliverableCommands {
    /// List deliverables committed for a project
    List(WorkflowArgs),
}

/// Command handler bound to a studio and a renderer.
pub struct Cli {
    studio: Studio,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(studio: Studio, renderer: TerminalRenderer) -> Self {
        Self { studio, renderer }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let result = self
                    .studio
                    .create_project_result(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&result.to_string())
            }
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Show(args) => {
                let project = self
                    .studio
                    .show_project(&args.into())
                    .await
                    .context("Failed to show project")?;
                self.renderer.render(&project.to_string())
            }
            ProjectCommands::Delete(args) => {
                let result = self
                    .studio
                    .delete_project_result(&args.into())
                    .await
                    .context("Failed to delete project")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_workflow_command(&self, command: WorkflowCommands) -> Result<()> {
        match command {
            WorkflowCommands::Show(args) => {
                let steps = self.studio.get_workflow(&(&args).into()).await;
                self.emit(args.json, steps.map(Steps), "Failed to load workflow")
            }
            WorkflowCommands::Active(args) => {
                let step = self.studio.active_step(&(&args).into()).await;
                if args.json {
                    return self.emit(true, step.map(JsonOnly), "Failed to load workflow");
                }
                match step.context("Failed to load workflow")? {
                    Some(step) => self.renderer.render(&step.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::success("Workflow complete".to_string()).to_string(),
                    ),
                }
            }
            WorkflowCommands::Resolve(args) => {
                let params: ResolveStep = (&args).into();
                if args.json {
                    let steps = self.studio.resolve_step(&params).await;
                    return self.emit(true, steps.map(JsonOnly), "Failed to resolve step");
                }
                let result = self
                    .studio
                    .resolve_step_result(&params)
                    .await
                    .context("Failed to resolve step")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_deliverable_command(&self, command: DeliverableCommands) -> Result<()> {
        match command {
            DeliverableCommands::List(args) => {
                let deliverables = self.studio.deliverables_result(&(&args).into()).await;
                self.emit(args.json, deliverables, "Failed to list deliverables")
            }
        }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .studio
            .list_projects_result()
            .await
            .context("Failed to list projects")?;
        self.renderer.render(&projects.to_string())
    }

    /// Print a result as markdown or JSON. In JSON mode failures are printed
    /// as a `{kind, message}` report before the error is returned.
    fn emit<T>(&self, json: bool, result: Result<T, StudioError>, context: &str) -> Result<()>
    where
        T: Printable,
    {
        match (json, result) {
            (true, Ok(value)) => {
                println!("{}", value.to_json()?);
                Ok(())
            }
            (true, Err(error)) => {
                println!("{}", serde_json::to_string_pretty(&error.report())?);
                Err(error).context(context.to_string())
            }
            (false, Ok(value)) => self.renderer.render(&value.to_markdown()),
            (false, Err(error)) => Err(error).context(context.to_string()),
        }
    }
}

/// Output that has both a markdown and a JSON form.
trait Printable {
    fn to_markdown(&self) -> String;
    fn to_json(&self) -> Result<String>;
}

impl Printable for Steps {
    fn to_markdown(&self) -> String {
        self.to_string()
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl Printable for studioflow_core::display::Deliverables {
    fn to_markdown(&self) -> String {
        self.to_string()
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

/// Wrapper for values that are only ever printed as JSON.
struct JsonOnly<T>(T);

impl<T: Serialize> Printable for JsonOnly<T> {
    fn to_markdown(&self) -> String {
        String::new()
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}
