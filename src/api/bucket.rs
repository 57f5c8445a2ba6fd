//! Bucket information.

use crate::api::ApiClient;
use crate::entity::{Bucket, BucketWire};
use crate::error::Result;
use crate::http;

impl ApiClient {
    /// Fetch a bucket's settings and quota/usage accounting.
    pub async fn fetch_bucket_info(&self, app_id: &str, bucket_id: &str) -> Result<Bucket> {
        let path = format!("/api/bucket/info/{}/{}", app_id, bucket_id);
        let response = http::expect_success(self.http().get(&path).send().await?).await?;
        let wire = response.json::<BucketWire>().await?;
        Bucket::try_from(wire)
    }
}
