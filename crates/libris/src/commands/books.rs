//! Book command handlers.

use std::sync::Arc;

use tabled::Tabled;
use tracing::debug;

use libris_core::{Book, BooksController};

use crate::cli::{AddArgs, GlobalOpts, ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Owner")]
    owner: String,
}

impl BookRow {
    fn new(index: usize, book: &Book, user: &str) -> Self {
        let owner = if book.is_owned_by(user) {
            format!("{} (you)", book.owner_id)
        } else {
            book.owner_id.clone()
        };
        Self {
            index: index + 1,
            name: book.name.clone(),
            author: book.author.clone(),
            owner,
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(
    controller: &BooksController,
    args: &ListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    controller.load_books().await;
    if let Some(message) = controller.error() {
        return Err(CliError::RequestFailed { message });
    }

    if args.private {
        controller.switch_to_private_books();
    } else {
        controller.switch_to_all_books();
    }
    debug!(filter = %controller.filter(), "rendering books");

    let books: Vec<Arc<Book>> = controller.books();
    let user = controller.store().user();
    let out = output::render_list(
        &global.output,
        &books,
        |i, b| BookRow::new(i, b, user),
        |b| format!("{}: {}", b.author, b.name),
    )?;

    if matches!(global.output, OutputFormat::Table) && !global.quiet {
        let color = output::should_color(&global.color);
        let heading = if controller.is_private_books_selected() {
            "Private books"
        } else {
            "Books"
        };
        println!(
            "{} ({})  ·  Your books: {}",
            output::emphasize(heading, color),
            controller.books_count(),
            controller.private_books_count()
        );
    }
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn add(
    controller: &BooksController,
    args: AddArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    controller.set_draft_name(args.name);
    controller.set_draft_author(args.author);
    if !controller.is_form_valid() {
        return Err(CliError::IncompleteBook);
    }

    let name = controller.draft_name();
    controller.submit().await;
    if let Some(message) = controller.error() {
        return Err(CliError::from_status(message, &name));
    }

    if !global.quiet {
        eprintln!(
            "Added '{name}' ({} books, {} yours)",
            controller.books_count(),
            controller.private_books_count()
        );
    }
    Ok(())
}
