use thiserror::Error;

/// Top-level error type for the `libris-api` crate.
///
/// `libris-core` maps these into domain errors; the `Display` output of
/// [`Error::Http`] and [`Error::Network`] is what ends up in the store's
/// error status, so it is kept free of extra prefixes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The server answered with a non-success status code.
    #[error("HTTP error! status: {status}")]
    Http { status: u16, body: String },

    /// Connection refused, DNS failure, timeout, or any other failure
    /// before a response arrived.
    #[error("{message}")]
    Network { message: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// The response body was not valid JSON, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}
