// Re-render trigger over every field a books view reads.

use tokio::sync::watch;

use super::Snapshot;
use crate::model::{Book, BooksFilter, FormDraft, RequestStatus};

/// Fires whenever anything a books view renders has changed.
///
/// Vended by [`BooksController::updates`](crate::BooksController::updates).
/// Presentation layers loop on [`changed()`](Self::changed) and re-read
/// the controller's accessors.
pub struct ViewUpdates {
    books: watch::Receiver<Snapshot<Book>>,
    status: watch::Receiver<RequestStatus>,
    filter: watch::Receiver<BooksFilter>,
    private_books_count: watch::Receiver<usize>,
    draft: watch::Receiver<FormDraft>,
}

impl ViewUpdates {
    pub(crate) fn new(
        books: watch::Receiver<Snapshot<Book>>,
        status: watch::Receiver<RequestStatus>,
        filter: watch::Receiver<BooksFilter>,
        private_books_count: watch::Receiver<usize>,
        draft: watch::Receiver<FormDraft>,
    ) -> Self {
        Self {
            books,
            status,
            filter,
            private_books_count,
            draft,
        }
    }

    /// Wait for the next change to any source.
    ///
    /// Returns `false` once the stores have been dropped.
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            r = self.books.changed() => r.is_ok(),
            r = self.status.changed() => r.is_ok(),
            r = self.filter.changed() => r.is_ok(),
            r = self.private_books_count.changed() => r.is_ok(),
            r = self.draft.changed() => r.is_ok(),
        }
    }

    /// Whether any source changed since the last [`changed()`](Self::changed).
    pub fn has_changed(&self) -> bool {
        [
            self.books.has_changed(),
            self.status.has_changed(),
            self.filter.has_changed(),
            self.private_books_count.has_changed(),
            self.draft.has_changed(),
        ]
        .into_iter()
        .any(|r| r.unwrap_or(false))
    }
}
