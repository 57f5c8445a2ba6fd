//! Byte-stream types for upload and download bodies.
//!
//! Payload bodies stream rather than buffering whole resources in memory.
//! The types here keep the public surface off any one transport library's
//! stream type: producers and consumers only see chunks of
//! `io::Result<Bytes>`.

use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, TryStreamExt};

/// A lazy, finite, non-restartable sequence of byte chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + 'static>>;

/// An upload body: either in-memory bytes or a streamed source.
pub enum Payload {
    /// A fully materialized body.
    Bytes(Bytes),
    /// A streamed body, consumed as the request is sent.
    Stream(ByteStream),
}

impl Payload {
    pub(crate) fn into_body(self) -> reqwest::Body {
        match self {
            Payload::Bytes(bytes) => reqwest::Body::from(bytes),
            Payload::Stream(stream) => reqwest::Body::wrap_stream(stream),
        }
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Payload::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for Payload {
    fn from(bytes: &'static [u8]) -> Self {
        Payload::Bytes(Bytes::from_static(bytes))
    }
}

impl From<ByteStream> for Payload {
    fn from(stream: ByteStream) -> Self {
        Payload::Stream(stream)
    }
}

/// Box a response body into a [`ByteStream`].
pub(crate) fn response_stream(response: reqwest::Response) -> ByteStream {
    Box::pin(
        response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_bytes() {
        let payload = Payload::from(vec![1u8, 2, 3]);
        assert!(matches!(payload, Payload::Bytes(ref b) if b.len() == 3));

        let payload = Payload::from(Bytes::from_static(b"abc"));
        assert!(matches!(payload, Payload::Bytes(_)));
    }

    #[test]
    fn test_payload_from_stream() {
        let chunks: Vec<io::Result<Bytes>> = vec![Ok(Bytes::from_static(b"chunk"))];
        let stream: ByteStream = Box::pin(futures::stream::iter(chunks));
        let payload = Payload::from(stream);
        assert!(matches!(payload, Payload::Stream(_)));
    }
}
