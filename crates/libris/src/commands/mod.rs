//! Command dispatch: bridges CLI args -> controller actions -> output formatting.

pub mod books;
pub mod config_cmd;

use libris_core::BooksController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &BooksController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => books::list(controller, &args, global).await,
        Command::Add(args) => books::add(controller, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
