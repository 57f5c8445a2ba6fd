//! Download operations.

use std::io::Write;

use futures::StreamExt;
use reqwest::header;

use crate::api::ApiClient;
use crate::entity::Resource;
use crate::error::{Result, SiloError};
use crate::http;
use crate::range::ByteRange;
use crate::stream::{self, ByteStream};

/// A file being downloaded from a node.
///
/// Metadata comes from the response headers; `stream` is the response body
/// and yields the payload incrementally. Dropping the value aborts the
/// in-flight exchange.
pub struct RemoteFile {
    /// File name from Content-Disposition, or the last path segment
    pub name: String,
    /// Content-Type reported by the node
    pub mime: String,
    /// Content-Length of the returned payload (the range length for
    /// partial downloads)
    pub size: u64,
    /// The payload body
    pub stream: ByteStream,
}

impl RemoteFile {
    /// Drain the payload into a writer, returning the bytes written.
    pub async fn save_to<W: Write + ?Sized>(mut self, writer: &mut W) -> Result<u64> {
        let mut written = 0u64;
        while let Some(chunk) = self.stream.next().await {
            let chunk = chunk.map_err(|e| SiloError::Custom(format!("Read error: {}", e)))?;
            writer
                .write_all(&chunk)
                .map_err(|e| SiloError::Custom(format!("Write error: {}", e)))?;
            written += chunk.len() as u64;
        }
        Ok(written)
    }
}

impl std::fmt::Debug for RemoteFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Download a file, optionally restricted to a byte range.
    ///
    /// The returned [`RemoteFile`] carries the body as a stream; nothing is
    /// buffered beyond the transport's own chunks. A range the node cannot
    /// serve fails with [`ErrorKind::RangeUnsatisfiable`](crate::ErrorKind).
    ///
    /// # Arguments
    /// * `resource` - File to download
    /// * `range` - Optional byte range; see [`ByteRange::header_value`]
    pub async fn download_file(
        &self,
        resource: &Resource,
        range: Option<&ByteRange>,
    ) -> Result<RemoteFile> {
        let mut request = self.http().get(&Self::file_path("download", resource));
        if let Some(range) = range {
            request = request.header(header::RANGE, range.header_value()?);
        }

        let response = http::expect_success(request.send().await?).await?;

        let size = response.content_length().unwrap_or(0);
        let mime = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let name = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| resource.file_name().to_string());

        Ok(RemoteFile {
            name,
            mime,
            size,
            stream: stream::response_stream(response),
        })
    }
}

/// Extract the filename parameter from a Content-Disposition value.
fn filename_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|raw| raw.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="a.txt""#),
            Some("a.txt".to_string())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=plain.bin"),
            Some("plain.bin".to_string())
        );
        assert_eq!(
            filename_from_disposition(r#"filename="spaced name.pdf"; attachment"#),
            Some("spaced name.pdf".to_string())
        );
    }

    #[test]
    fn test_filename_from_disposition_missing() {
        assert_eq!(filename_from_disposition("attachment"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
        assert_eq!(filename_from_disposition(""), None);
    }
}
