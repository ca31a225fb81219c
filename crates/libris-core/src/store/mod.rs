// ── Reactive stores ──
//
// Canonical book collection plus UI preferences, each backed by `watch`
// channels for push-based change notification.

mod books_store;
mod preference_store;

pub use books_store::{ADD_BOOK_FAILED, BooksStore};
pub use preference_store::PreferenceStore;
