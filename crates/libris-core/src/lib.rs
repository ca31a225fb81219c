//! Reactive state layer between `libris-api` and presentation layers.
//!
//! - **[`BooksRepository`]** — translates `fetch_all` / `create` into
//!   transport calls and normalizes the responses.
//!
//! - **[`BooksStore`]** — owns the canonical book collection and the
//!   shared [`RequestStatus`]. Pushes the owned-book count into an
//!   attached [`PreferenceStore`] after every successful load.
//!
//! - **[`PreferenceStore`]** — owns the active [`BooksFilter`] and the
//!   denormalized private-book counter.
//!
//! - **[`BooksController`]** — owns the add-book form draft and exposes the
//!   single read/write surface a presentation layer consumes.
//!
//! All state lives in `tokio::sync::watch` channels, so every field can be
//! read synchronously or subscribed to for change notification.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod repository;
pub mod store;
pub mod stream;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{LibrisConfig, TlsVerification};
pub use controller::BooksController;
pub use error::CoreError;
pub use model::{Book, BooksFilter, FormDraft, NewBook, RequestStatus};
pub use repository::BooksRepository;
pub use store::{ADD_BOOK_FAILED, BooksStore, PreferenceStore};
pub use stream::{EntityStream, Snapshot, ViewUpdates};
