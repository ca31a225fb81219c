// ── Runtime configuration ──
//
// Describes *where* the books service lives and *who* the current user is.
// Never touches disk: the CLI builds a `LibrisConfig` (via libris-config)
// and hands it in.

use std::time::Duration;

use url::Url;

use crate::error::CoreError;

/// Public demo deployment of the books service.
pub const DEFAULT_SERVER: &str = "https://tdd.demo.reaktivate.com";

/// User whose books count as "private" when nothing else is configured.
pub const DEFAULT_USER: &str = "postnikov";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to a single books service as a single user.
#[derive(Debug, Clone)]
pub struct LibrisConfig {
    /// Service root (e.g., `https://tdd.demo.reaktivate.com`).
    pub server: Url,
    /// Current-user identifier. Scopes the collection URL and decides
    /// which books are "private".
    pub user: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            server: Url::parse(DEFAULT_SERVER).expect("default server URL is valid"),
            user: DEFAULT_USER.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl LibrisConfig {
    /// Collection base URL: `{server}/v1/books/{user}`.
    pub fn base_url(&self) -> Result<Url, CoreError> {
        if self.user.trim().is_empty() {
            return Err(CoreError::Config {
                message: "user must not be empty".into(),
            });
        }
        let mut url = self.server.clone();
        url.path_segments_mut()
            .map_err(|()| CoreError::Config {
                message: format!("Invalid URL: {} cannot be a base", self.server),
            })?
            .pop_if_empty()
            .extend(["v1", "books", self.user.as_str()]);
        Ok(url)
    }
}
