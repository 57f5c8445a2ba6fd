//! Configuration-bound facade over the API accessor.

use crate::api::{ApiClient, RemoteFile};
use crate::entity::{Bucket, Entity, Resource, ResumeInfo, UploadSession};
use crate::error::Result;
use crate::range::ByteRange;
use crate::stream::Payload;

/// Connection settings for one application/bucket scope on one node.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Bearer token sent with every request
    pub token: String,
    /// Application identifier
    pub app_id: String,
    /// Bucket identifier
    pub bucket_id: String,
    /// Node address as `host` or `host:port`
    pub address: String,
    /// Use https instead of http
    pub secure: bool,
    /// Optional proxy URL
    pub proxy: Option<String>,
}

impl ConnectorConfig {
    /// The node base URL implied by `address` and `secure`.
    pub fn node_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.address)
    }
}

/// A client bound to one application/bucket scope.
///
/// Pure currying over [`ApiClient`]: every method pairs the bound
/// identifiers with a caller-supplied path and delegates unchanged. The
/// connector owns no further state and introduces no failure modes of its
/// own.
///
/// # Example
/// ```no_run
/// use silolib::{Connector, ConnectorConfig};
///
/// # async fn example() -> silolib::Result<()> {
/// let connector = Connector::new(ConnectorConfig {
///     token: "secret".to_string(),
///     app_id: "app-1".to_string(),
///     bucket_id: "bkt-9".to_string(),
///     address: "node.example.com:9000".to_string(),
///     secure: true,
///     proxy: None,
/// })?;
///
/// connector.upload("notes.txt", b"hello".to_vec(), 5).await?;
/// for entity in connector.list_files(None).await? {
///     println!("{} ({} bytes)", entity.name, entity.size);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Connector {
    api: ApiClient,
    app_id: String,
    bucket_id: String,
}

impl Connector {
    /// Bind the configuration and build the underlying accessor once.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let api = match &config.proxy {
            Some(proxy) => ApiClient::with_proxy(config.node_url(), &config.token, proxy)?,
            None => ApiClient::new(config.node_url(), &config.token),
        };

        Ok(Self {
            api,
            app_id: config.app_id,
            bucket_id: config.bucket_id,
        })
    }

    /// The underlying accessor.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The bound application identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The bound bucket identifier.
    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// Address `path` inside the bound scope.
    pub fn resource(&self, path: &str) -> Resource {
        Resource::new(&self.app_id, &self.bucket_id, path)
    }

    /// Download a file; see [`ApiClient::download_file`].
    pub async fn download(&self, path: &str, range: Option<&ByteRange>) -> Result<RemoteFile> {
        self.api.download_file(&self.resource(path), range).await
    }

    /// Upload a file in one shot; see [`ApiClient::upload_file`].
    pub async fn upload(&self, path: &str, payload: impl Into<Payload>, size: u64) -> Result<()> {
        self.api
            .upload_file(&self.resource(path), payload, size)
            .await
    }

    /// Start a durable upload session; see
    /// [`ApiClient::start_upload_session`].
    pub async fn start_upload_session(&self, path: &str, size: u64) -> Result<UploadSession> {
        self.api
            .start_upload_session(&self.resource(path), size)
            .await
    }

    /// Append a chunk under an active session; see [`ApiClient::put_chunk`].
    pub async fn put_chunk(
        &self,
        session: &UploadSession,
        chunk: impl Into<Payload>,
    ) -> Result<()> {
        self.api
            .put_chunk(&self.app_id, &self.bucket_id, session, chunk)
            .await
    }

    /// Find the resume offset of an interrupted session; see
    /// [`ApiClient::resume_upload_session`].
    pub async fn resume_upload_session(&self, session: &UploadSession) -> Result<ResumeInfo> {
        self.api
            .resume_upload_session(&self.app_id, &self.bucket_id, session)
            .await
    }

    /// Rename a file; see [`ApiClient::rename_file`].
    pub async fn rename_file(&self, path: &str, to: &str) -> Result<()> {
        self.api.rename_file(&self.resource(path), to).await
    }

    /// Rename a directory; see [`ApiClient::rename_directory`].
    pub async fn rename_directory(&self, path: &str, to: &str) -> Result<()> {
        self.api.rename_directory(&self.resource(path), to).await
    }

    /// Delete a file; see [`ApiClient::delete_file`].
    pub async fn delete_file(&self, path: &str) -> Result<()> {
        self.api.delete_file(&self.resource(path)).await
    }

    /// Delete a directory; see [`ApiClient::delete_directory`].
    pub async fn delete_directory(&self, path: &str, recursive: bool) -> Result<()> {
        self.api
            .delete_directory(&self.resource(path), recursive)
            .await
    }

    /// Create a directory; see [`ApiClient::create_directory`].
    pub async fn create_directory(&self, path: &str) -> Result<()> {
        self.api.create_directory(&self.resource(path)).await
    }

    /// List all files in the bound bucket; see
    /// [`ApiClient::list_bucket_files`].
    pub async fn list_files(&self, range: Option<&ByteRange>) -> Result<Vec<Entity>> {
        self.api
            .list_bucket_files(&self.app_id, &self.bucket_id, range)
            .await
    }

    /// List all directories in the bound bucket; see
    /// [`ApiClient::list_bucket_directories`].
    pub async fn list_directories(&self, range: Option<&ByteRange>) -> Result<Vec<Entity>> {
        self.api
            .list_bucket_directories(&self.app_id, &self.bucket_id, range)
            .await
    }

    /// List the direct children of a directory; see
    /// [`ApiClient::list_directory`].
    pub async fn list_directory(
        &self,
        path: &str,
        range: Option<&ByteRange>,
    ) -> Result<Vec<Entity>> {
        self.api.list_directory(&self.resource(path), range).await
    }

    /// Get information about a file or directory; see
    /// [`ApiClient::stat_resource`].
    pub async fn stat(&self, path: &str) -> Result<Entity> {
        self.api.stat_resource(&self.resource(path)).await
    }

    /// Fetch the bound bucket's settings and usage; see
    /// [`ApiClient::fetch_bucket_info`].
    pub async fn bucket_info(&self) -> Result<Bucket> {
        self.api
            .fetch_bucket_info(&self.app_id, &self.bucket_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectorConfig {
        ConnectorConfig {
            token: "secret".to_string(),
            app_id: "app-1".to_string(),
            bucket_id: "bkt-9".to_string(),
            address: "node.local:9000".to_string(),
            secure: false,
            proxy: None,
        }
    }

    #[test]
    fn test_node_url_scheme() {
        let mut cfg = config();
        assert_eq!(cfg.node_url(), "http://node.local:9000");

        cfg.secure = true;
        assert_eq!(cfg.node_url(), "https://node.local:9000");
    }

    #[test]
    fn test_connector_binds_identifiers() {
        let connector = Connector::new(config()).unwrap();
        assert_eq!(connector.app_id(), "app-1");
        assert_eq!(connector.bucket_id(), "bkt-9");
        assert_eq!(connector.api().node_url(), "http://node.local:9000");

        let resource = connector.resource("docs/report.pdf");
        assert_eq!(resource.app_id, "app-1");
        assert_eq!(resource.bucket_id, "bkt-9");
        assert_eq!(resource.path, "docs/report.pdf");

        let root = connector.resource("");
        assert!(root.is_bucket_root());
    }

    #[test]
    fn test_connector_with_proxy() {
        let mut cfg = config();
        cfg.proxy = Some("http://127.0.0.1:8080".to_string());
        assert!(Connector::new(cfg).is_ok());

        let mut cfg = config();
        cfg.proxy = Some(":::::::".to_string());
        assert!(Connector::new(cfg).is_err());
    }
}
