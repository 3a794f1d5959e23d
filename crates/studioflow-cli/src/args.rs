use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DeliverableCommands, ProjectCommands, WorkflowCommands};

/// Studioflow: human-in-the-loop workflows for creative-agency projects
///
/// Each project walks through an ordered sequence of steps owned by nominal
/// agents (Strategist, Director, Designer, CFO). Exactly one step is active at
/// a time and waits for your input, choice, approval or acknowledgment.
#[derive(Parser)]
#[command(version, about, name = "sf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/studioflow/studioflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Inspect and advance project workflows
    #[command(alias = "w")]
    Workflow {
        #[command(subcommand)]
        command: WorkflowCommands,
    },
    /// Inspect committed deliverables
    #[command(alias = "d")]
    Deliverable {
        #[command(subcommand)]
        command: DeliverableCommands,
    },
    /// Start the MCP server on stdio
    Serve,
}
