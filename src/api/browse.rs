//! Listing and stat operations.

use crate::api::ApiClient;
use crate::entity::{Entity, EntityWire, Resource};
use crate::error::Result;
use crate::http;
use crate::range::ByteRange;

impl ApiClient {
    /// List all files in a bucket, in the order the node returns them.
    ///
    /// # Arguments
    /// * `range` - Optional pagination window; see [`ByteRange::query_string`]
    pub async fn list_bucket_files(
        &self,
        app_id: &str,
        bucket_id: &str,
        range: Option<&ByteRange>,
    ) -> Result<Vec<Entity>> {
        let path = format!(
            "/api/bucket/list/files/{}/{}{}",
            app_id,
            bucket_id,
            pagination(range)
        );
        self.fetch_entities(&path).await
    }

    /// List all directories in a bucket, in the order the node returns them.
    pub async fn list_bucket_directories(
        &self,
        app_id: &str,
        bucket_id: &str,
        range: Option<&ByteRange>,
    ) -> Result<Vec<Entity>> {
        let path = format!(
            "/api/bucket/list/directories/{}/{}{}",
            app_id,
            bucket_id,
            pagination(range)
        );
        self.fetch_entities(&path).await
    }

    /// List the direct children of a directory.
    pub async fn list_directory(
        &self,
        resource: &Resource,
        range: Option<&ByteRange>,
    ) -> Result<Vec<Entity>> {
        let path = format!(
            "{}{}",
            Self::directory_path("list", resource),
            pagination(range)
        );
        self.fetch_entities(&path).await
    }

    /// Get information about a single file or directory.
    pub async fn stat_resource(&self, resource: &Resource) -> Result<Entity> {
        let path = format!(
            "/api/bucket/stat/{}/{}/{}",
            resource.app_id, resource.bucket_id, resource.path
        );
        let response = http::expect_success(self.http().get(&path).send().await?).await?;
        let wire = response.json::<EntityWire>().await?;
        Entity::try_from(wire)
    }

    async fn fetch_entities(&self, path: &str) -> Result<Vec<Entity>> {
        let response = http::expect_success(self.http().get(path).send().await?).await?;
        let wire = response.json::<Vec<EntityWire>>().await?;
        // Order is the node's; no sorting or dedup on this side.
        wire.into_iter().map(Entity::try_from).collect()
    }
}

fn pagination(range: Option<&ByteRange>) -> String {
    range.map(ByteRange::query_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_query() {
        assert_eq!(pagination(None), "");
        assert_eq!(pagination(Some(&ByteRange::default())), "");
        assert_eq!(pagination(Some(&ByteRange::closed(0, 9))), "?start=0&end=9");
        assert_eq!(pagination(Some(&ByteRange::from_offset(10))), "?start=10-");
        assert_eq!(pagination(Some(&ByteRange::suffix(5))), "?end=5");
    }
}
