//! Byte range specifications for downloads and listing pagination.

use crate::error::{Result, SiloError};

/// A byte interval with optional bounds.
///
/// The same value serializes two incompatible ways depending on where it is
/// used:
///
/// * as an HTTP `Range` header for partial downloads, via
///   [`header_value`](ByteRange::header_value), where an end-only range has
///   suffix semantics ("last N bytes");
/// * as listing pagination query parameters, via
///   [`query_string`](ByteRange::query_string), where `start`/`end` are
///   offsets into the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte (or listing offset), inclusive.
    pub start: Option<u64>,
    /// Last byte (or listing offset), inclusive. Without `start`, selects
    /// the last `end` bytes of the resource.
    pub end: Option<u64>,
}

impl ByteRange {
    /// Create a range from optional bounds.
    pub fn new(start: Option<u64>, end: Option<u64>) -> Self {
        Self { start, end }
    }

    /// Closed range `[start, end]`.
    pub fn closed(start: u64, end: u64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Open-ended range from `start` to the end of the resource.
    pub fn from_offset(start: u64) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Suffix range selecting the last `len` bytes.
    pub fn suffix(len: u64) -> Self {
        Self {
            start: None,
            end: Some(len),
        }
    }

    /// Check whether neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Serialize as an HTTP `Range` header value.
    ///
    /// A range with neither bound cannot be expressed as a header and fails
    /// with [`SiloError::EmptyRange`].
    pub fn header_value(&self) -> Result<String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(format!("bytes={}-{}", start, end)),
            (Some(start), None) => Ok(format!("bytes={}-", start)),
            (None, Some(end)) => Ok(format!("bytes=-{}", end)),
            (None, None) => Err(SiloError::EmptyRange),
        }
    }

    /// Serialize as a listing pagination query string, leading `?` included.
    ///
    /// An empty range serializes to an empty string, meaning no pagination
    /// constraint. The node parses the start-only form with a trailing
    /// hyphen, same shape as the range header.
    pub fn query_string(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!("?start={}&end={}", start, end),
            (Some(start), None) => format!("?start={}-", start),
            (None, Some(end)) => format!("?end={}", end),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_closed() {
        assert_eq!(ByteRange::closed(0, 499).header_value().unwrap(), "bytes=0-499");
        assert_eq!(
            ByteRange::closed(100, 100).header_value().unwrap(),
            "bytes=100-100"
        );
    }

    #[test]
    fn test_header_open_ended() {
        assert_eq!(
            ByteRange::from_offset(500).header_value().unwrap(),
            "bytes=500-"
        );
        assert_eq!(ByteRange::from_offset(0).header_value().unwrap(), "bytes=0-");
    }

    #[test]
    fn test_header_suffix() {
        assert_eq!(ByteRange::suffix(200).header_value().unwrap(), "bytes=-200");
    }

    #[test]
    fn test_header_empty_range_fails() {
        let err = ByteRange::default().header_value().unwrap_err();
        assert!(matches!(err, SiloError::EmptyRange));
    }

    #[test]
    fn test_query_closed() {
        assert_eq!(ByteRange::closed(5, 25).query_string(), "?start=5&end=25");
    }

    #[test]
    fn test_query_start_only_keeps_trailing_hyphen() {
        assert_eq!(ByteRange::from_offset(5).query_string(), "?start=5-");
    }

    #[test]
    fn test_query_end_only() {
        assert_eq!(ByteRange::suffix(25).query_string(), "?end=25");
    }

    #[test]
    fn test_query_empty_range() {
        assert_eq!(ByteRange::default().query_string(), "");
        assert!(ByteRange::default().is_empty());
        assert!(!ByteRange::from_offset(0).is_empty());
    }
}
