//! Rename, delete, and directory creation operations.

use serde_json::json;

use crate::api::ApiClient;
use crate::entity::Resource;
use crate::error::Result;
use crate::http;

impl ApiClient {
    /// Rename a file in place.
    ///
    /// `to` is the new name, not a path. Fails with
    /// [`ErrorKind::NotFound`](crate::ErrorKind) if the file is absent and
    /// [`ErrorKind::EntityExists`](crate::ErrorKind) if the target name is
    /// taken.
    pub async fn rename_file(&self, resource: &Resource, to: &str) -> Result<()> {
        let response = self
            .http()
            .post(&Self::file_path("rename", resource))
            .json(&json!({ "to": to }))
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Rename a directory in place. Same failure modes as
    /// [`rename_file`](ApiClient::rename_file).
    pub async fn rename_directory(&self, resource: &Resource, to: &str) -> Result<()> {
        let response = self
            .http()
            .post(&Self::directory_path("rename", resource))
            .json(&json!({ "to": to }))
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Delete a file.
    pub async fn delete_file(&self, resource: &Resource) -> Result<()> {
        let response = self
            .http()
            .delete(&Self::file_path("delete", resource))
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Delete a directory.
    ///
    /// The `recursive` flag is passed through unmodified; with it unset, the
    /// node answers [`ErrorKind::NotEmpty`](crate::ErrorKind) for a
    /// non-empty directory.
    pub async fn delete_directory(&self, resource: &Resource, recursive: bool) -> Result<()> {
        let response = self
            .http()
            .delete(&Self::directory_path("delete", resource))
            .json(&json!({ "recursive": recursive }))
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }

    /// Create a new directory. Fails with
    /// [`ErrorKind::EntityExists`](crate::ErrorKind) if it already exists.
    pub async fn create_directory(&self, resource: &Resource) -> Result<()> {
        let response = self
            .http()
            .post(&Self::directory_path("create", resource))
            .send()
            .await?;

        http::expect_success(response).await?;
        Ok(())
    }
}
