//! Error types for the silolib library.

use thiserror::Error;

use crate::api::ErrorKind;

/// Main error type for silolib operations.
#[derive(Error, Debug)]
pub enum SiloError {
    /// The node rejected the request with a structured error body.
    #[error("node error: {kind} - {message}")]
    Api {
        /// Error kind decoded from the response `code` field.
        kind: ErrorKind,
        /// Message supplied by the node, or the kind description.
        message: String,
    },

    /// Non-success HTTP status without a structured error body.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A byte range with neither bound was passed to header construction.
    #[error("byte range needs at least one bound")]
    EmptyRange,

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

impl SiloError {
    /// Project this error onto the closed [`ErrorKind`] set.
    ///
    /// `Api` errors surface the kind the node reported; every other variant
    /// collapses to [`ErrorKind::Local`], so callers can distinguish "the
    /// node explicitly rejected this" from "the response could not be
    /// interpreted".
    pub fn kind(&self) -> ErrorKind {
        match self {
            SiloError::Api { kind, .. } => *kind,
            _ => ErrorKind::Local,
        }
    }

    pub(crate) fn api(kind: ErrorKind, message: impl Into<String>) -> Self {
        SiloError::Api {
            kind,
            message: message.into(),
        }
    }
}

/// Result type alias for silolib operations.
pub type Result<T> = std::result::Result<T, SiloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_kind() {
        let err = SiloError::api(ErrorKind::NotFound, "no such file");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "node error: NotFound - no such file");
    }

    #[test]
    fn test_local_kinds() {
        assert_eq!(SiloError::HttpError(500).kind(), ErrorKind::Local);
        assert_eq!(SiloError::EmptyRange.kind(), ErrorKind::Local);
        assert_eq!(
            SiloError::Custom("boom".to_string()).kind(),
            ErrorKind::Local
        );

        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(SiloError::from(json_err).kind(), ErrorKind::Local);
    }
}
