// ── Canonical book collection ──
//
// Owns the books and the shared request status. Every state change goes
// through `load_books` / `add_book`; there is no other write path.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::PreferenceStore;
use crate::model::{Book, BooksFilter, NewBook, RequestStatus};
use crate::repository::BooksRepository;
use crate::stream::{EntityStream, Snapshot};

/// Error status message when the server answers a create without accepting it.
pub const ADD_BOOK_FAILED: &str = "Failed to add book";

/// Reactive owner of the book collection and its request lifecycle.
///
/// Overlapping operations are resolved by ticket: each `load_books` /
/// `add_book` takes a new ticket when it starts, and its result is applied
/// only if no newer operation started in the meantime.
pub struct BooksStore {
    repository: BooksRepository,
    /// Books owned by this user are "private".
    user: String,
    preferences: Option<Arc<PreferenceStore>>,
    books: watch::Sender<Snapshot<Book>>,
    status: watch::Sender<RequestStatus>,
    /// Ticket of the newest operation.
    ticket: AtomicU64,
}

impl BooksStore {
    pub fn new(repository: BooksRepository, user: impl Into<String>) -> Self {
        let (books, _) = watch::channel(Arc::new(Vec::new()));
        let (status, _) = watch::channel(RequestStatus::Idle);

        Self {
            repository,
            user: user.into(),
            preferences: None,
            books,
            status,
            ticket: AtomicU64::new(0),
        }
    }

    /// Attach the preference store that receives the owned-book count and
    /// selects the filtered view.
    pub fn with_preferences(mut self, preferences: Arc<PreferenceStore>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Re-fetch the whole collection.
    ///
    /// On failure the previous books stay readable and the status carries
    /// the error message.
    pub async fn load_books(&self) {
        let ticket = self.begin();
        self.fetch(ticket).await;
    }

    /// Create a book, then re-fetch the collection if the server accepted it.
    ///
    /// Never appends locally: the reload picks up server-assigned fields.
    pub async fn add_book(&self, name: &str, author: &str) {
        let ticket = self.begin();
        let book = NewBook {
            name: name.to_owned(),
            author: author.to_owned(),
        };

        match self.repository.create(&book).await {
            Ok(true) if self.is_current(ticket) => {
                debug!(name, author, "book accepted, reloading collection");
                // The reload settles under this ticket, so a newer start
                // still supersedes it.
                self.fetch(ticket).await;
            }
            Ok(true) => debug!(ticket, "discarding superseded book creation"),
            Ok(false) => {
                if self.settle(ticket, RequestStatus::Error(ADD_BOOK_FAILED.into()), || {}) {
                    warn!(name, author, "server did not accept book");
                } else {
                    debug!(ticket, "discarding superseded book creation");
                }
            }
            Err(e) => {
                if self.settle(ticket, RequestStatus::Error(e.to_string()), || {}) {
                    warn!(error = %e, "failed to add book");
                } else {
                    debug!(ticket, "discarding superseded book creation");
                }
            }
        }
    }

    async fn fetch(&self, ticket: u64) {
        match self.repository.fetch_all().await {
            Ok(books) => {
                let books: Vec<Arc<Book>> = books.into_iter().map(Arc::new).collect();
                let owned = count_owned(&books, &self.user);
                let total = books.len();

                let applied = self.settle(ticket, RequestStatus::Idle, || {
                    self.books.send_replace(Arc::new(books));
                    if let Some(preferences) = &self.preferences {
                        preferences.set_private_books_count(owned);
                    }
                });
                if applied {
                    info!(total, owned, "books loaded");
                } else {
                    debug!(ticket, "discarding superseded book load");
                }
            }
            Err(e) => {
                if self.settle(ticket, RequestStatus::Error(e.to_string()), || {}) {
                    warn!(error = %e, "failed to load books");
                } else {
                    debug!(ticket, "discarding superseded book load");
                }
            }
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The full canonical collection (cheap `Arc` clone).
    pub fn books(&self) -> Snapshot<Book> {
        self.books.borrow().clone()
    }

    pub fn books_count(&self) -> usize {
        self.books.borrow().len()
    }

    pub fn status(&self) -> RequestStatus {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.status.borrow().error().map(str::to_owned)
    }

    /// The active filter; `All` when no preference store is attached.
    pub fn filter(&self) -> BooksFilter {
        self.preferences
            .as_ref()
            .map_or(BooksFilter::All, |p| p.filter())
    }

    /// Books visible under the active filter, in collection order.
    pub fn filtered_books(&self) -> Vec<Arc<Book>> {
        self.books_for(self.filter())
    }

    /// Books visible under `filter`, in collection order.
    pub fn books_for(&self, filter: BooksFilter) -> Vec<Arc<Book>> {
        filter_books(&self.books.borrow(), filter, &self.user)
    }

    /// Number of books owned by the current user.
    pub fn private_books_count(&self) -> usize {
        count_owned(&self.books.borrow(), &self.user)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_books(&self) -> EntityStream<Book> {
        EntityStream::new(self.books.subscribe())
    }

    pub(crate) fn subscribe_books_raw(&self) -> watch::Receiver<Snapshot<Book>> {
        self.books.subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<RequestStatus> {
        self.status.subscribe()
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Take a new ticket and enter `Loading`, clearing any error.
    ///
    /// The ticket moves under the status lock, so it cannot interleave
    /// with [`settle`](Self::settle).
    fn begin(&self) -> u64 {
        let mut ticket = 0;
        self.status.send_modify(|status| {
            ticket = self.ticket.fetch_add(1, Ordering::AcqRel) + 1;
            *status = RequestStatus::Loading;
        });
        ticket
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.ticket.load(Ordering::Acquire) == ticket
    }

    /// Run `commit` and publish `status` if `ticket` is still the newest.
    ///
    /// The check and both writes happen under the status lock. Returns
    /// `false` when a newer operation has started. Lock order is status,
    /// then books and preferences; no reader holds those while borrowing
    /// status.
    fn settle(&self, ticket: u64, status: RequestStatus, commit: impl FnOnce()) -> bool {
        self.status.send_if_modified(|current| {
            if !self.is_current(ticket) {
                return false;
            }
            commit();
            *current = status;
            true
        })
    }
}

fn filter_books(books: &[Arc<Book>], filter: BooksFilter, user: &str) -> Vec<Arc<Book>> {
    match filter {
        BooksFilter::All => books.to_vec(),
        BooksFilter::Private => books
            .iter()
            .filter(|b| b.is_owned_by(user))
            .cloned()
            .collect(),
    }
}

fn count_owned(books: &[Arc<Book>], user: &str) -> usize {
    books.iter().filter(|b| b.is_owned_by(user)).count()
}
