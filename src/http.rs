//! HTTP transport wrapper for Silo node requests.

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::api::ErrorKind;
use crate::error::{Result, SiloError};

/// HTTP client bound to one node address and access token.
///
/// Stateless aside from the defaults fixed at construction; a single
/// instance is shared by all operations of an accessor.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client for the given node URL and bearer token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_base_url(base_url.into()),
            token: token.into(),
        }
    }

    /// Create a new HTTP client routed through a proxy.
    ///
    /// # Arguments
    /// * `proxy` - Proxy URL (e.g., "http://proxy:8080" or "socks5://proxy:1080")
    pub fn with_proxy(
        base_url: impl Into<String>,
        token: impl Into<String>,
        proxy: &str,
    ) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| SiloError::Custom(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| SiloError::Custom(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: trim_base_url(base_url.into()),
            token: token.into(),
        })
    }

    /// The node URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::DELETE, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "node request");
        self.client.request(method, url).bearer_auth(&self.token)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Wire form of a structured node error body.
#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    #[serde(default)]
    message: Option<String>,
}

/// Pass a successful response through, or turn a failure into [`SiloError`].
///
/// A non-success status with a body carrying a recognized `code` becomes
/// [`SiloError::Api`]; anything else collapses to [`SiloError::HttpError`].
/// This is the only place the error taxonomy is decided.
pub(crate) async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    debug!(status = status.as_u16(), "node request failed");

    if let Ok(wire) = response.json::<WireError>().await {
        if let Some(kind) = ErrorKind::from_code(&wire.code) {
            let message = wire
                .message
                .unwrap_or_else(|| kind.description().to_string());
            return Err(SiloError::api(kind, message));
        }
    }

    Err(SiloError::HttpError(status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new("http://node.local:9000", "token");
        assert_eq!(client.base_url(), "http://node.local:9000");

        // Trailing slashes are stripped so path joining stays predictable
        let client = HttpClient::new("http://node.local:9000/", "token");
        assert_eq!(client.base_url(), "http://node.local:9000");
    }

    #[test]
    fn test_proxy_creation() {
        let client = HttpClient::with_proxy("http://node.local:9000", "token", "http://127.0.0.1:8080");
        assert!(client.is_ok());
    }

    #[test]
    fn test_proxy_invalid() {
        let res = HttpClient::with_proxy("http://node.local:9000", "token", ":::::::");
        assert!(res.is_err());
    }
}
