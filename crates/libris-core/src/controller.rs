// ── Books controller ──
//
// The single read/write surface for presentation layers. Owns the add-book
// form draft and composes the books and preference stores.

use std::sync::Arc;

use libris_api::transport::{TlsMode, TransportConfig};
use libris_api::{HttpTransport, Transport};
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::config::{LibrisConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{Book, BooksFilter, FormDraft, RequestStatus};
use crate::repository::BooksRepository;
use crate::store::{BooksStore, PreferenceStore};
use crate::stream::{EntityStream, ViewUpdates};

/// Mediates user intent between a presentation layer and the stores.
///
/// Cheaply cloneable via `Arc<ControllerInner>`. Presentation code reads the
/// accessors below and calls the actions; it never touches the stores.
#[derive(Clone)]
pub struct BooksController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    store: Arc<BooksStore>,
    preferences: Arc<PreferenceStore>,
    draft: watch::Sender<FormDraft>,
}

impl BooksController {
    /// Compose existing stores. `store` should have `preferences` attached.
    pub fn new(store: Arc<BooksStore>, preferences: Arc<PreferenceStore>) -> Self {
        let (draft, _) = watch::channel(FormDraft::default());
        Self {
            inner: Arc::new(ControllerInner {
                store,
                preferences,
                draft,
            }),
        }
    }

    /// Wire transport, repository, and both stores from configuration.
    ///
    /// Does not load anything; call [`load_books()`](Self::load_books).
    pub fn from_config(config: &LibrisConfig) -> Result<Self, CoreError> {
        let base_url = config.base_url()?;
        let transport = HttpTransport::new(base_url, &build_transport(config))?;
        debug!(base_url = %transport.base_url(), user = %config.user, "books transport ready");
        Ok(Self::with_transport(Arc::new(transport), &config.user))
    }

    /// Wire both stores over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>, user: &str) -> Self {
        let preferences = Arc::new(PreferenceStore::new());
        let store = BooksStore::new(BooksRepository::new(transport), user)
            .with_preferences(Arc::clone(&preferences));
        Self::new(Arc::new(store), preferences)
    }

    /// Access the underlying books store.
    pub fn store(&self) -> &Arc<BooksStore> {
        &self.inner.store
    }

    /// Access the underlying preference store.
    pub fn preferences(&self) -> &Arc<PreferenceStore> {
        &self.inner.preferences
    }

    // ── Form ─────────────────────────────────────────────────────────

    pub fn set_draft_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.inner.draft.send_modify(|d| d.name = name);
    }

    pub fn set_draft_author(&self, author: impl Into<String>) {
        let author = author.into();
        self.inner.draft.send_modify(|d| d.author = author);
    }

    pub fn reset_form(&self) {
        self.inner.draft.send_replace(FormDraft::default());
    }

    pub fn draft(&self) -> FormDraft {
        self.inner.draft.borrow().clone()
    }

    pub fn draft_name(&self) -> String {
        self.inner.draft.borrow().name.clone()
    }

    pub fn draft_author(&self) -> String {
        self.inner.draft.borrow().author.clone()
    }

    pub fn is_form_valid(&self) -> bool {
        self.inner.draft.borrow().is_valid()
    }

    /// Whether a submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_loading()
    }

    /// Add the drafted book, then clear the form.
    ///
    /// Silently ignored while the draft is invalid. The form is cleared
    /// whatever the outcome; failures show up in [`error()`](Self::error).
    pub async fn submit(&self) {
        let draft = self.draft();
        if !draft.is_valid() {
            trace!("ignoring submit of incomplete draft");
            return;
        }

        self.inner.store.add_book(&draft.name, &draft.author).await;
        self.reset_form();
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn load_books(&self) {
        self.inner.store.load_books().await;
    }

    pub fn switch_to_all_books(&self) {
        self.inner.preferences.set_filter(BooksFilter::All);
    }

    pub fn switch_to_private_books(&self) {
        self.inner.preferences.set_filter(BooksFilter::Private);
    }

    // ── Read-through accessors ───────────────────────────────────────

    /// Books visible under the active filter.
    pub fn books(&self) -> Vec<Arc<Book>> {
        self.inner.store.filtered_books()
    }

    /// Number of books visible under the active filter.
    pub fn books_count(&self) -> usize {
        self.books().len()
    }

    pub fn status(&self) -> RequestStatus {
        self.inner.store.status()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.store.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.store.error()
    }

    pub fn filter(&self) -> BooksFilter {
        self.inner.preferences.filter()
    }

    pub fn is_all_books_selected(&self) -> bool {
        self.inner.preferences.is_all_books_selected()
    }

    pub fn is_private_books_selected(&self) -> bool {
        self.inner.preferences.is_private_books_selected()
    }

    pub fn private_books_count(&self) -> usize {
        self.inner.preferences.private_books_count()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_books(&self) -> EntityStream<Book> {
        self.inner.store.subscribe_books()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<RequestStatus> {
        self.inner.store.subscribe_status()
    }

    pub fn subscribe_draft(&self) -> watch::Receiver<FormDraft> {
        self.inner.draft.subscribe()
    }

    /// A re-render trigger over every field this controller exposes.
    pub fn updates(&self) -> ViewUpdates {
        ViewUpdates::new(
            self.inner.store.subscribe_books_raw(),
            self.inner.store.subscribe_status(),
            self.inner.preferences.subscribe_filter(),
            self.inner.preferences.subscribe_private_books_count(),
            self.inner.draft.subscribe(),
        )
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn build_transport(config: &LibrisConfig) -> TransportConfig {
    TransportConfig {
        tls: match config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}
