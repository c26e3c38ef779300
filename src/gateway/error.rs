use thiserror::Error;

/// Coarse classification surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport error, timeout, or non-success status.
    FetchFailed,
    /// The body is not a well-formed list of users.
    ParseFailed,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Fetch timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },

    #[error("Response is not a list of users: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Parse { .. } => FetchErrorKind::ParseFailed,
            _ => FetchErrorKind::FetchFailed,
        }
    }

    /// Stable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Client { .. } => "client_error",
            FetchError::Connection { .. } => "connection_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Body { .. } => "body_error",
            FetchError::Parse { .. } => "parse_error",
        }
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Connection { .. } | FetchError::Timeout { .. } | FetchError::Body { .. } => {
                true
            }
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Client { .. } | FetchError::Parse { .. } => false,
        }
    }
}
