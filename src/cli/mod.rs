//! # Command-Line Interface
//!
//! The presentation layer: it calls store operations and renders store
//! state, nothing more. The core never depends on anything in here.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Task | To-do entries | `task add`, `task toggle`, `task rm` |
//! | List | Named checklists | `list add`, `list show`, `list rm` |
//! | Item | Entries within a list | `item add`, `item toggle`, `item edit` |
//! | Status | Overview | `status` |
//!
//! ## Output Formats
//!
//! All commands support `--format text|json` and `--verbose` debug lines
//! on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod task_cmd;
mod list_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
