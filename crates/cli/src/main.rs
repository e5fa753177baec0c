use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use runbook_core::manager::{RunbookManager, RunbookManagerConfig};

mod commands;

/// Runbook - A declarative task runner
#[derive(Parser)]
#[command(name = "runbook")]
#[command(about = "Run declarative tasks from a JSON file")]
#[command(version)]
struct Cli {
    /// Path to the task definition file
    #[arg(short, long, default_value = "./tasks.json")]
    path: PathBuf,

    /// Override the concurrency ceiling for async tasks
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Increase diagnostic logging on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tasks in the collection
    List,
    /// Run a single task by name
    Run {
        /// Name of the task to run (first match wins)
        name: String,
    },
    /// Run every task in the collection
    RunAll,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .modules(["runbook_core"])
        .verbosity((cli.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    // Initialize the manager with all business logic; a bad tasks file is
    // fatal before anything runs.
    let manager = RunbookManager::new(RunbookManagerConfig {
        tasks_path: cli.path,
        max_concurrent: cli.max_concurrent,
    })
    .map_err(|e| anyhow::anyhow!("Failed to load tasks: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List => commands::list::execute(&manager),
        Commands::Run { name } => commands::run::execute(&manager, &name).await,
        Commands::RunAll => commands::run_all::execute(&manager).await,
    }
}
