//! Accessor construction and request path building.

use crate::entity::Resource;
use crate::error::Result;
use crate::http::HttpClient;

/// Silo node API accessor.
///
/// One async method per node endpoint. Every method takes the application
/// and bucket identifiers explicitly (directly or inside a [`Resource`]),
/// issues a single HTTP exchange, and returns a normalized result. No
/// method retries, caches, or validates beyond range shape checking; see
/// [`Connector`](crate::Connector) for a facade with the identifiers bound
/// once.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// Create an accessor for the given node URL and bearer token.
    pub fn new(node_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(node_url, token),
        }
    }

    /// Create an accessor routed through a proxy.
    pub fn with_proxy(
        node_url: impl Into<String>,
        token: impl Into<String>,
        proxy: &str,
    ) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_proxy(node_url, token, proxy)?,
        })
    }

    /// The node URL this accessor talks to.
    pub fn node_url(&self) -> &str {
        self.http.base_url()
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn file_path(op: &str, resource: &Resource) -> String {
        format!(
            "/api/file/{}/{}/{}/{}",
            op, resource.app_id, resource.bucket_id, resource.path
        )
    }

    pub(crate) fn directory_path(op: &str, resource: &Resource) -> String {
        format!(
            "/api/directory/{}/{}/{}/{}",
            op, resource.app_id, resource.bucket_id, resource.path
        )
    }
}
