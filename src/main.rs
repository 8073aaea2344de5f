//! Checklist - local-first personal task and checklist manager

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = checklist_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
