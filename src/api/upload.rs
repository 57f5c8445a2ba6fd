//! Upload operations: one-shot uploads and durable sessions.

use reqwest::header;
use serde_json::json;

use crate::api::ApiClient;
use crate::entity::{Resource, ResumeInfo, UploadSession};
use crate::error::Result;
use crate::http;
use crate::stream::Payload;

impl ApiClient {
    /// Upload a file in one shot.
    ///
    /// `size` is the declared payload length and becomes the request
    /// Content-Length. If it does not match the actual payload, the node
    /// rejects the upload and discards any partial artifact.
    ///
    /// # Arguments
    /// * `resource` - Destination file
    /// * `payload` - Body bytes or stream
    /// * `size` - Declared payload length in bytes
    pub async fn upload_file(
        &self,
        resource: &Resource,
        payload: impl Into<Payload>,
        size: u64,
    ) -> Result<()> {
        let response = self
            .http()
            .post(&Self::file_path("upload/oneshot", resource))
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .header(header::CONTENT_LENGTH, size)
            .body(payload.into().into_body())
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Start a durable (resumable) upload session for `size` total bytes.
    ///
    /// Shares the endpoint path with [`upload_file`](ApiClient::upload_file);
    /// the node tells the two apart by the JSON content type. The returned
    /// session starts with zero bytes uploaded.
    pub async fn start_upload_session(
        &self,
        resource: &Resource,
        size: u64,
    ) -> Result<UploadSession> {
        let response = self
            .http()
            .post(&Self::file_path("upload/oneshot", resource))
            .json(&json!({ "size": size }))
            .send()
            .await?;

        let response = http::expect_success(response).await?;
        Ok(response.json::<UploadSession>().await?)
    }

    /// Append a chunk of payload data under an active session.
    ///
    /// Fails with [`ErrorKind::NoSuchSession`](crate::ErrorKind) once the
    /// session expired or was never started.
    pub async fn put_chunk(
        &self,
        app_id: &str,
        bucket_id: &str,
        session: &UploadSession,
        chunk: impl Into<Payload>,
    ) -> Result<()> {
        let path = format!(
            "/api/file/upload/put/{}/{}/{}",
            app_id, bucket_id, session.code
        );
        let response = self
            .http()
            .put(&path)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(chunk.into().into_body())
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Look up how far an interrupted session got, to pick the resume
    /// offset. The session code is passed back verbatim; only the confirmed
    /// byte count comes back.
    pub async fn resume_upload_session(
        &self,
        app_id: &str,
        bucket_id: &str,
        session: &UploadSession,
    ) -> Result<ResumeInfo> {
        let path = format!("/api/file/upload/resume/{}/{}", app_id, bucket_id);
        let response = self
            .http()
            .post(&path)
            .json(&json!({ "session_id": session.code }))
            .send()
            .await?;

        let response = http::expect_success(response).await?;
        Ok(response.json::<ResumeInfo>().await?)
    }
}
