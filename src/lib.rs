//! # silolib
//!
//! Rust client library for Silo object-storage nodes.
//!
//! ## Features
//!
//! - **File transfers**: streamed uploads and downloads, with optional byte
//!   ranges for partial content.
//! - **Durable upload sessions**: start, append chunks, and resume
//!   interrupted uploads against the node's session tracking.
//! - **Entity management**: rename, delete, and stat files and directories,
//!   create directories.
//! - **Listings**: bucket-wide and per-directory listings with pagination,
//!   in node order.
//! - **Bucket accounting**: quota and usage via `bucket_info`.
//!
//! Every operation is a single HTTP exchange returning a [`Result`]; the
//! node's structured error codes surface as [`ErrorKind`] values through
//! [`SiloError::kind`]. The library performs no retries and keeps no cache;
//! what the node says is what you get.
//!
//! ## Example
//!
//! ```no_run
//! use silolib::{ByteRange, Connector, ConnectorConfig};
//!
//! # async fn example() -> silolib::Result<()> {
//! let connector = Connector::new(ConnectorConfig {
//!     token: std::env::var("SILO_TOKEN").unwrap_or_default(),
//!     app_id: "app-1".to_string(),
//!     bucket_id: "bkt-9".to_string(),
//!     address: "node.example.com:9000".to_string(),
//!     secure: true,
//!     proxy: None,
//! })?;
//!
//! // Upload, then read back the first kilobyte
//! connector.upload("docs/notes.txt", b"hello silo".to_vec(), 10).await?;
//! let file = connector.download("docs/notes.txt", Some(&ByteRange::closed(0, 1023))).await?;
//! println!("{} ({}, {} bytes)", file.name, file.mime, file.size);
//!
//! // Resumable upload
//! let session = connector.start_upload_session("big.iso", 1 << 30).await?;
//! connector.put_chunk(&session, vec![0u8; 1 << 20]).await?;
//! let resume = connector.resume_upload_session(&session).await?;
//! println!("node has {} bytes", resume.uploaded);
//! # Ok(())
//! # }
//! ```
//!
//! Use [`ApiClient`] directly when one client needs to address several
//! applications or buckets; [`Connector`] binds a single scope once.

pub mod api;
pub mod connector;
pub mod entity;
pub mod error;
pub mod http;
pub mod range;
pub mod stream;

// Re-export commonly used types
pub use api::{ApiClient, ErrorKind, RemoteFile};
pub use connector::{Connector, ConnectorConfig};
pub use entity::{Bucket, Entity, Resource, ResumeInfo, UploadSession};
pub use error::{Result, SiloError};
pub use range::ByteRange;
pub use stream::{ByteStream, Payload};
