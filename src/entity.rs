//! Entities exchanged with a Silo storage node.
//!
//! Wire forms carry timestamps as ISO-8601 strings and deserialize with
//! serde; client forms carry [`DateTime<Utc>`] values. Conversion happens
//! once, at the accessor boundary, and is one-directional.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, SiloError};

/// Address of a file or directory on a node: application id, bucket id and
/// the path inside the bucket. An empty path addresses the bucket root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Application the bucket belongs to.
    pub app_id: String,
    /// Bucket inside the application.
    pub bucket_id: String,
    /// Slash-separated path inside the bucket.
    pub path: String,
}

impl Resource {
    /// Create a resource address.
    pub fn new(
        app_id: impl Into<String>,
        bucket_id: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            bucket_id: bucket_id.into(),
            path: path.into(),
        }
    }

    /// Address the bucket root.
    pub fn bucket_root(app_id: impl Into<String>, bucket_id: impl Into<String>) -> Self {
        Self::new(app_id, bucket_id, "")
    }

    /// Check whether this resource addresses the bucket root.
    pub fn is_bucket_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Last path segment, used as a fallback file name.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or_default()
    }
}

/// A file or directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity name (no path component)
    pub name: String,
    /// Identifier of the parent directory; absent at bucket root
    pub dir: Option<String>,
    /// The entity's own directory identifier; present iff `is_dir`
    pub dir_id: Option<String>,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Whether the entity is a directory
    pub is_dir: bool,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl Entity {
    /// Check whether the entity sits at the bucket root.
    pub fn is_root(&self) -> bool {
        self.dir.is_none()
    }
}

/// Wire form of [`Entity`].
#[derive(Debug, Deserialize)]
pub(crate) struct EntityWire {
    pub name: String,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub dir_id: Option<String>,
    pub size: u64,
    pub is_dir: bool,
    pub created: String,
    pub modified: String,
}

impl TryFrom<EntityWire> for Entity {
    type Error = SiloError;

    fn try_from(wire: EntityWire) -> Result<Self> {
        Ok(Entity {
            name: wire.name,
            dir: wire.dir,
            dir_id: wire.dir_id,
            size: wire.size,
            is_dir: wire.is_dir,
            created: parse_timestamp(&wire.created)?,
            modified: parse_timestamp(&wire.modified)?,
        })
    }
}

/// A bucket with its settings and usage accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Application the bucket belongs to
    pub app_id: String,
    /// Bucket identifier
    pub bucket_id: String,
    /// Bucket name
    pub name: String,
    /// Whether the node encrypts content at rest
    pub encryption: bool,
    /// Whether uploads become visible atomically
    pub atomic_upload: bool,
    /// Storage quota in bytes
    pub quota: u64,
    /// Number of files in the bucket
    pub file_count: u64,
    /// Bytes currently taken
    pub space_taken: u64,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last modification timestamp
    pub modified: DateTime<Utc>,
}

impl Bucket {
    /// Get free storage in bytes.
    pub fn free(&self) -> u64 {
        self.quota.saturating_sub(self.space_taken)
    }

    /// Get usage percentage.
    pub fn usage_percent(&self) -> f64 {
        if self.quota == 0 {
            0.0
        } else {
            (self.space_taken as f64 / self.quota as f64) * 100.0
        }
    }
}

/// Wire form of [`Bucket`].
#[derive(Debug, Deserialize)]
pub(crate) struct BucketWire {
    pub app_id: String,
    pub bucket_id: String,
    pub name: String,
    pub encryption: bool,
    pub atomic_upload: bool,
    pub quota: u64,
    pub file_count: u64,
    pub space_taken: u64,
    pub created: String,
    pub modified: String,
}

impl TryFrom<BucketWire> for Bucket {
    type Error = SiloError;

    fn try_from(wire: BucketWire) -> Result<Self> {
        Ok(Bucket {
            app_id: wire.app_id,
            bucket_id: wire.bucket_id,
            name: wire.name,
            encryption: wire.encryption,
            atomic_upload: wire.atomic_upload,
            quota: wire.quota,
            file_count: wire.file_count,
            space_taken: wire.space_taken,
            created: parse_timestamp(&wire.created)?,
            modified: parse_timestamp(&wire.modified)?,
        })
    }
}

/// A durable (resumable) upload session tracked by the node.
///
/// The `code` is opaque; the client passes it back verbatim when appending
/// chunks or resuming, and never inspects or refreshes validity.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadSession {
    /// Opaque session token
    pub code: String,
    /// Seconds the session stays valid
    pub validity: u64,
    /// Bytes the node has received so far
    #[serde(default)]
    pub uploaded: u64,
}

/// Response to resuming an upload session: the confirmed byte count only.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ResumeInfo {
    /// Bytes the node has received so far
    pub uploaded: u64,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SiloError::Custom(format!("invalid timestamp {value:?}: {e}")))
}
