//! List and item CLI commands
//!
//! Items are addressed by 1-based position on the command line and
//! resolved to their stable IDs against freshly loaded state, so two
//! `item rm L 1` invocations in a row delete the current first item
//! each time instead of operating on stale indices.

use anyhow::{anyhow, Result};
use clap::Subcommand;

use super::app::AppContext;
use crate::domain::{ItemDraft, ItemId, List, ListId};
use crate::store::StoreError;

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a list with initial items
    ///
    /// Example:
    ///   checklist list add Groceries -i Milk -i Eggs
    Add {
        /// List title
        title: String,

        /// Item text (repeatable)
        #[arg(long = "item", short = 'i', required = true)]
        items: Vec<String>,
    },

    /// Show all lists
    Ls,

    /// Show one list with its items
    Show {
        /// List ID
        id: String,
    },

    /// Delete a list and all its items
    Rm {
        /// List ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Append an item to a list
    Add {
        /// List ID
        list: String,

        /// Item text
        text: String,
    },

    /// Overwrite an item's text
    Edit {
        /// List ID
        list: String,

        /// Item position (1-based)
        position: usize,

        /// New text
        text: String,
    },

    /// Toggle an item's done flag
    Toggle {
        /// List ID
        list: String,

        /// Item position (1-based)
        position: usize,
    },

    /// Delete an item from a list
    Rm {
        /// List ID
        list: String,

        /// Item position (1-based)
        position: usize,
    },
}

pub fn run_list(cmd: ListCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        ListCommands::Add { title, items } => add_list(ctx, &title, &items),
        ListCommands::Ls => show_all_lists(ctx),
        ListCommands::Show { id } => show_list(ctx, &id),
        ListCommands::Rm { id } => remove_list(ctx, &id),
    }
}

pub fn run_item(cmd: ItemCommands, ctx: &AppContext) -> Result<()> {
    match cmd {
        ItemCommands::Add { list, text } => add_item(ctx, &list, &text),
        ItemCommands::Edit {
            list,
            position,
            text,
        } => edit_item(ctx, &list, position, &text),
        ItemCommands::Toggle { list, position } => toggle_item(ctx, &list, position),
        ItemCommands::Rm { list, position } => remove_item(ctx, &list, position),
    }
}

/// Resolves a 1-based position to the item's stable ID
fn resolve_position(list: &List, position: usize) -> Result<ItemId> {
    position
        .checked_sub(1)
        .and_then(|idx| list.items.get(idx))
        .map(|item| item.id.clone())
        .ok_or_else(|| {
            anyhow!(
                "No item at position {} in '{}' ({} items)",
                position,
                list.title,
                list.items.len()
            )
        })
}

fn add_list(ctx: &AppContext, title: &str, items: &[String]) -> Result<()> {
    let mut store = ctx.open_store();
    let drafts: Vec<ItemDraft> = items.iter().map(|t| ItemDraft::new(t.clone())).collect();

    match store.create_list(title, &drafts) {
        Ok(list) => {
            if ctx.output.is_json() {
                ctx.output.data(&list);
            } else {
                ctx.output.success(&format!(
                    "Created list {}: {} ({} items)",
                    list.id,
                    list.title,
                    list.items.len()
                ));
            }
            Ok(())
        }
        Err(e @ (StoreError::BlankTitle | StoreError::EmptyItems)) => {
            ctx.output.error(&e.to_string());
            Err(anyhow!("rejected: {}", e))
        }
        Err(e) => Err(e.into()),
    }
}

fn show_all_lists(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();

    if ctx.output.is_json() {
        ctx.output.data(&store.lists());
        return Ok(());
    }

    if store.lists().is_empty() {
        ctx.output.success("No lists created yet.");
        return Ok(());
    }

    for list in store.lists() {
        ctx.output.row(&[
            &list.id.to_string(),
            &list.title,
            &format!("{}/{} done", list.done_count(), list.items.len()),
        ]);
    }

    Ok(())
}

fn show_list(ctx: &AppContext, id: &str) -> Result<()> {
    let id: ListId = id.parse()?;
    let store = ctx.open_store();

    let list = store
        .list(&id)
        .ok_or_else(|| anyhow!("No list with ID {}", id))?;

    if ctx.output.is_json() {
        ctx.output.data(list);
        return Ok(());
    }

    ctx.output.row(&[&list.id.to_string(), &list.title]);
    for (pos, item) in list.items.iter().enumerate() {
        let mark = if item.done { "[x]" } else { "[ ]" };
        ctx.output
            .row(&[&format!("  {}.", pos + 1), mark, &item.text]);
    }

    Ok(())
}

fn remove_list(ctx: &AppContext, id: &str) -> Result<()> {
    let id: ListId = id.parse()?;
    let mut store = ctx.open_store();

    if store.remove_list(&id)? {
        ctx.output.success(&format!("Deleted list {}", id));
    } else {
        ctx.output.success(&format!("No list {} to delete", id));
    }

    Ok(())
}

fn add_item(ctx: &AppContext, list: &str, text: &str) -> Result<()> {
    let list_id: ListId = list.parse()?;
    let mut store = ctx.open_store();

    match store.add_item(&list_id, text) {
        Ok(item) => {
            ctx.output
                .success(&format!("Added item to {}: {}", list_id, item.text));
            Ok(())
        }
        Err(StoreError::BlankItem) => {
            ctx.output.error("Item text must not be blank");
            Err(anyhow!("rejected: blank item text"))
        }
        Err(e) => Err(e.into()),
    }
}

fn edit_item(ctx: &AppContext, list: &str, position: usize, text: &str) -> Result<()> {
    let list_id: ListId = list.parse()?;
    let mut store = ctx.open_store();

    let list = store
        .list(&list_id)
        .ok_or_else(|| anyhow!("No list with ID {}", list_id))?;
    let item_id = resolve_position(list, position)?;

    store.edit_item(&list_id, &item_id, text)?;
    ctx.output
        .success(&format!("Updated item {} in {}", position, list_id));

    Ok(())
}

fn toggle_item(ctx: &AppContext, list: &str, position: usize) -> Result<()> {
    let list_id: ListId = list.parse()?;
    let mut store = ctx.open_store();

    let list = store
        .list(&list_id)
        .ok_or_else(|| anyhow!("No list with ID {}", list_id))?;
    let item_id = resolve_position(list, position)?;

    let done = store.toggle_item(&list_id, &item_id)?;
    let state = if done { "done" } else { "not done" };
    ctx.output
        .success(&format!("Item {} in {} is now {}", position, list_id, state));

    Ok(())
}

fn remove_item(ctx: &AppContext, list: &str, position: usize) -> Result<()> {
    let list_id: ListId = list.parse()?;
    let mut store = ctx.open_store();

    let list = store
        .list(&list_id)
        .ok_or_else(|| anyhow!("No list with ID {}", list_id))?;
    let item_id = resolve_position(list, position)?;

    store.remove_item(&list_id, &item_id)?;
    ctx.output
        .success(&format!("Deleted item {} from {}", position, list_id));

    Ok(())
}
