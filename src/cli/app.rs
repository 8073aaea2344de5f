//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{list_cmd, task_cmd};
use crate::storage::{Config, FileAdapter};
use crate::store::Store;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(author, version, about = "Local-first personal task and checklist manager")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Data directory override (defaults to the platform data dir)
    #[arg(long, global = true, env = "CHECKLIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(subcommand)]
    Task(task_cmd::TaskCommands),

    /// Manage lists
    #[command(subcommand)]
    List(list_cmd::ListCommands),

    /// Manage items within a list
    #[command(subcommand)]
    Item(list_cmd::ItemCommands),

    /// Show an overview of tasks and lists
    Status,
}

/// Shared per-invocation context for commands
pub struct AppContext {
    pub output: Output,
    pub config: Config,
    data_dir: PathBuf,
}

impl AppContext {
    /// Opens the store backed by the resolved data directory
    pub fn open_store(&self) -> Store<FileAdapter> {
        self.output
            .verbose(&format!("data dir: {}", self.data_dir.display()));
        Store::load(FileAdapter::new(&self.data_dir))
    }
}

/// Parses arguments and runs the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    let config = Config::load()?;
    let data_dir = config.resolve_data_dir(cli.data_dir.clone())?;

    let ctx = AppContext {
        output,
        config,
        data_dir,
    };

    match cli.command {
        Commands::Task(cmd) => task_cmd::run(cmd, &ctx),
        Commands::List(cmd) => list_cmd::run_list(cmd, &ctx),
        Commands::Item(cmd) => list_cmd::run_item(cmd, &ctx),
        Commands::Status => status(&ctx),
    }
}

fn status(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();

    let open = store.tasks().iter().filter(|t| !t.completed).count();
    let done = store.tasks().len() - open;

    if ctx.output.is_json() {
        ctx.output.data(&serde_json::json!({
            "tasks": { "open": open, "completed": done },
            "lists": store.lists().len(),
        }));
        return Ok(());
    }

    ctx.output.row(&[
        "Tasks:",
        &format!("{} open, {} completed", open, done),
    ]);
    ctx.output.row(&["Lists:", &store.lists().len().to_string()]);

    for list in store.lists() {
        ctx.output.row(&[
            "",
            &format!(
                "{}: {}/{} done",
                list.title,
                list.done_count(),
                list.items.len()
            ),
        ]);
    }

    Ok(())
}
