//! Task CLI commands

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Subcommand;

use super::app::AppContext;
use crate::domain::{Task, TaskId};
use crate::store::StoreError;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    ///
    /// Examples:
    ///   checklist task add "Buy milk"
    ///   checklist task add "File taxes" --deadline 2026-09-30
    Add {
        /// Task text
        text: String,

        /// Optional deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },

    /// List tasks
    List {
        /// Include completed tasks even when the config hides them
        #[arg(long)]
        all: bool,
    },

    /// Toggle a task's completion flag
    Toggle {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },
}

pub fn run(cmd: TaskCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        TaskCommands::Add { text, deadline } => add_task(ctx, &text, deadline),
        TaskCommands::List { all } => list_tasks(ctx, all),
        TaskCommands::Toggle { id } => toggle_task(ctx, &id),
        TaskCommands::Rm { id } => remove_task(ctx, &id),
    }
}

fn add_task(ctx: &AppContext, text: &str, deadline: Option<NaiveDate>) -> Result<()> {
    let mut store = ctx.open_store();

    match store.create_task(text, deadline) {
        Ok(task) => {
            if ctx.output.is_json() {
                ctx.output.data(&task);
            } else {
                ctx.output.success(&format!("Added task {}: {}", task.id, task.text));
            }
            Ok(())
        }
        Err(StoreError::BlankTask) => {
            ctx.output.error("Task text must not be blank");
            Err(anyhow!("rejected: blank task text"))
        }
        Err(e) => Err(e.into()),
    }
}

fn list_tasks(ctx: &AppContext, all: bool) -> Result<()> {
    let store = ctx.open_store();
    let show_completed = all || ctx.config.show_completed;

    let tasks: Vec<&Task> = store
        .tasks()
        .iter()
        .filter(|t| show_completed || !t.completed)
        .collect();

    if ctx.output.is_json() {
        ctx.output.data(&tasks);
        return Ok(());
    }

    if tasks.is_empty() {
        ctx.output.success("No tasks yet.");
        return Ok(());
    }

    for task in tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let deadline = task
            .deadline
            .map(|d| format!("due {}", d))
            .unwrap_or_default();
        ctx.output
            .row(&[&task.id.to_string(), mark, &task.text, &deadline]);
    }

    Ok(())
}

fn toggle_task(ctx: &AppContext, id: &str) -> Result<()> {
    let id: TaskId = id.parse()?;
    let mut store = ctx.open_store();

    let (completed, _token) = store.toggle_task(&id)?;

    // Render the feedback tone the same way a live view would flash it
    let tone = store
        .highlight()
        .current()
        .map(|(_, tone)| tone.label())
        .unwrap_or("idle");

    let state = if completed { "completed" } else { "not completed" };
    if ctx.output.is_json() {
        ctx.output.data(&serde_json::json!({
            "id": id.to_string(),
            "completed": completed,
            "highlight": tone,
        }));
    } else {
        ctx.output
            .success(&format!("Task {} is now {} ({})", id, state, tone));
    }

    Ok(())
}

fn remove_task(ctx: &AppContext, id: &str) -> Result<()> {
    let id: TaskId = id.parse()?;
    let mut store = ctx.open_store();

    if store.remove_task(&id)? {
        ctx.output.success(&format!("Deleted task {}", id));
    } else {
        ctx.output.success(&format!("No task {} to delete", id));
    }

    Ok(())
}
