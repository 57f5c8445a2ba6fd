//! Silo node error codes.

/// Error kinds reported by a Silo storage node.
///
/// The node reports failures as a JSON body with a `code` field holding one
/// of these names. `Local` is never sent by the node; it marks failures that
/// did not originate from a structured node response (connection errors,
/// unreadable bodies, client-side misuse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Internal node error
    Internal,
    /// Malformed or invalid request
    BadRequest,
    /// Resource does not exist
    NotFound,
    /// Resource already exists
    EntityExists,
    /// Upload session unknown or expired
    NoSuchSession,
    /// Missing or rejected credentials
    BadAuth,
    /// Bucket quota exhausted
    InsufficientStorage,
    /// Directory is not empty
    NotEmpty,
    /// Requested byte range cannot be served
    RangeUnsatisfiable,
    /// Failure without a structured node response
    Local,
}

impl ErrorKind {
    /// Parse a wire error code. Unknown codes yield `None`; `Local` has no
    /// wire form and is never produced here.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Internal" => Some(ErrorKind::Internal),
            "BadRequest" => Some(ErrorKind::BadRequest),
            "NotFound" => Some(ErrorKind::NotFound),
            "EntityExists" => Some(ErrorKind::EntityExists),
            "NoSuchSession" => Some(ErrorKind::NoSuchSession),
            "BadAuth" => Some(ErrorKind::BadAuth),
            "InsufficientStorage" => Some(ErrorKind::InsufficientStorage),
            "NotEmpty" => Some(ErrorKind::NotEmpty),
            "RangeUnsatisfiable" => Some(ErrorKind::RangeUnsatisfiable),
            _ => None,
        }
    }

    /// Get the wire code for this kind.
    pub fn as_code(&self) -> &'static str {
        match self {
            ErrorKind::Internal => "Internal",
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::EntityExists => "EntityExists",
            ErrorKind::NoSuchSession => "NoSuchSession",
            ErrorKind::BadAuth => "BadAuth",
            ErrorKind::InsufficientStorage => "InsufficientStorage",
            ErrorKind::NotEmpty => "NotEmpty",
            ErrorKind::RangeUnsatisfiable => "RangeUnsatisfiable",
            ErrorKind::Local => "Local",
        }
    }

    /// Get human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::Internal => "Internal node error",
            ErrorKind::BadRequest => "Malformed or invalid request",
            ErrorKind::NotFound => "Resource does not exist",
            ErrorKind::EntityExists => "Resource already exists",
            ErrorKind::NoSuchSession => "Upload session unknown or expired",
            ErrorKind::BadAuth => "Missing or rejected credentials",
            ErrorKind::InsufficientStorage => "Bucket quota exhausted",
            ErrorKind::NotEmpty => "Directory is not empty",
            ErrorKind::RangeUnsatisfiable => "Requested byte range cannot be served",
            ErrorKind::Local => "Local error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
