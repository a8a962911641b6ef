//! Error types for the SE Ranking client
//!
//! Failures are split by where they happen: the transport (network, DNS, TLS),
//! the remote service (non-2xx status), or our own JSON handling.

/// Failure raised by a [`Transport`](crate::http::Transport) before any response body exists.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// ureq failed to complete the request
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Reading or writing the connection failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The response body is not valid JSON for the expected result.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The client configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// True when the request failed before a response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when a response arrived but its body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// HTTP status of a rejected response, if that is what this error is
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = ApiError> = std::result::Result<T, E>;
