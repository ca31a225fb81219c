// HTTP transport for the books service
//
// Wraps `reqwest::Client` with base-URL joining and status checking.
// Callers get parsed JSON values back; domain decoding happens in
// `libris-core`.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Characters of an undecodable body quoted in the error message.
const PREVIEW_CHARS: usize = 200;

/// The JSON request/response surface the domain layer talks to.
///
/// Both methods fail on non-success HTTP status and propagate network
/// failures as-is. Implemented by [`HttpTransport`]; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` relative to the service base URL.
    async fn get(&self, path: &str) -> Result<Value, Error>;

    /// POST `body` as JSON to `path` relative to the service base URL.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, Error>;
}

/// `reqwest`-backed [`Transport`].
///
/// Request URLs are built by appending the path to the base URL verbatim,
/// so a base of `https://host/v1/books/alice` and a path of `/books`
/// yields `https://host/v1/books/alice/books`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a transport with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for `path`.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Check the status and parse the body as JSON.
    ///
    /// An empty success body parses as `null`.
    async fn parse_response(resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "request rejected");
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        trace!(len = body.len(), "response body received");

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(PREVIEW_CHARS).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        let url = self.url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        Self::parse_response(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        let url = self.url(path)?;
        debug!("POST {}", url);

        // `.json()` sets `Content-Type: application/json`.
        let resp = self.http.post(url).json(body).send().await?;
        Self::parse_response(resp).await
    }
}
