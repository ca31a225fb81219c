// ── Core error types ──
//
// Domain errors from libris-core. The `From<libris_api::Error>` impl keeps
// the transport's message verbatim: it is exactly what the books store
// surfaces in its error status.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Network failure or non-success HTTP status.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered, but not with the shape we expect.
    #[error("Malformed response: {message}")]
    Deserialization { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<libris_api::Error> for CoreError {
    fn from(err: libris_api::Error) -> Self {
        match err {
            libris_api::Error::Http { .. } => CoreError::Transport {
                message: err.to_string(),
            },
            libris_api::Error::Network { message } => CoreError::Transport { message },
            libris_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            libris_api::Error::Tls(message) => CoreError::Config { message },
            libris_api::Error::Deserialization { message, body: _ } => {
                CoreError::Deserialization { message }
            }
        }
    }
}
