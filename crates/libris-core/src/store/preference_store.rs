use tokio::sync::watch;
use tracing::debug;

use crate::model::BooksFilter;

/// UI preferences: the active filter and the owned-book counter.
///
/// Never sees a `Book`. The counter is pushed in by
/// [`BooksStore`](super::BooksStore) after every successful load.
pub struct PreferenceStore {
    filter: watch::Sender<BooksFilter>,
    private_books_count: watch::Sender<usize>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        let (filter, _) = watch::channel(BooksFilter::default());
        let (private_books_count, _) = watch::channel(0);
        Self {
            filter,
            private_books_count,
        }
    }

    pub fn filter(&self) -> BooksFilter {
        *self.filter.borrow()
    }

    pub fn set_filter(&self, filter: BooksFilter) {
        debug!(%filter, "books filter selected");
        self.filter.send_replace(filter);
    }

    pub fn private_books_count(&self) -> usize {
        *self.private_books_count.borrow()
    }

    pub fn set_private_books_count(&self, count: usize) {
        self.private_books_count.send_replace(count);
    }

    pub fn is_all_books_selected(&self) -> bool {
        self.filter() == BooksFilter::All
    }

    pub fn is_private_books_selected(&self) -> bool {
        self.filter() == BooksFilter::Private
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_filter(&self) -> watch::Receiver<BooksFilter> {
        self.filter.subscribe()
    }

    pub fn subscribe_private_books_count(&self) -> watch::Receiver<usize> {
        self.private_books_count.subscribe()
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}
