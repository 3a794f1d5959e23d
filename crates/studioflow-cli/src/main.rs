//! Studioflow CLI application.
//!
//! Command-line and MCP front end for the studioflow workflow engine.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StudioMcpServer};
use renderer::TerminalRenderer;
use studioflow_core::StudioBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let studio = StudioBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize studio")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Studioflow started");

    match command {
        Some(Project { command }) => {
            Cli::new(studio, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Workflow { command }) => {
            Cli::new(studio, renderer)
                .handle_workflow_command(command)
                .await
        }
        Some(Deliverable { command }) => {
            Cli::new(studio, renderer)
                .handle_deliverable_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Studioflow MCP server");
            run_stdio_server(StudioMcpServer::new(studio))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(studio, renderer).list_projects().await,
    }
}
