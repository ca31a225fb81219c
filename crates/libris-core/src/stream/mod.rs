// ── Reactive streams ──
//
// Subscription types for consuming store changes.

mod updates;

use std::sync::Arc;

use tokio::sync::watch;

pub use updates::ViewUpdates;

/// Snapshot shape shared by every entity collection.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// A subscription to a collection of entities.
///
/// Holds the snapshot seen last and waits for the next one via
/// [`changed()`](Self::changed).
pub struct EntityStream<T: Send + Sync + 'static> {
    current: Snapshot<T>,
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Snapshot<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or the last `changed()`).
    pub fn current(&self) -> &Snapshot<T> {
        &self.current
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the owning store has been dropped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }
}
