// ── Books repository ──
//
// Translates domain operations into transport calls. The collection
// lives at the base URL root; creation posts to `/books`.

use std::sync::Arc;

use libris_api::Transport;
use serde_json::Value;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{Book, NewBook};

const COLLECTION_PATH: &str = "/";
const CREATE_PATH: &str = "/books";

/// Domain-level access to the remote book collection.
#[derive(Clone)]
pub struct BooksRepository {
    transport: Arc<dyn Transport>,
}

impl BooksRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the whole collection.
    pub async fn fetch_all(&self) -> Result<Vec<Book>, CoreError> {
        let value = self.transport.get(COLLECTION_PATH).await?;
        let books: Vec<Book> =
            serde_json::from_value(value).map_err(|e| CoreError::Deserialization {
                message: format!("expected a list of books: {e}"),
            })?;
        debug!(count = books.len(), "fetched book collection");
        Ok(books)
    }

    /// Create a book. `Ok(false)` means the server answered but did not
    /// accept the write; only `{"status": "ok"}` counts as accepted.
    pub async fn create(&self, book: &NewBook) -> Result<bool, CoreError> {
        let body = serde_json::to_value(book).map_err(|e| CoreError::Deserialization {
            message: e.to_string(),
        })?;
        let response = self.transport.post(CREATE_PATH, &body).await?;
        let accepted = response.get("status").and_then(Value::as_str) == Some("ok");
        debug!(accepted, "create book answered");
        Ok(accepted)
    }
}
