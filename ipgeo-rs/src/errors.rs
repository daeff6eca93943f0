use thiserror::Error;

/// Message shown for any geolocation response that is not a usable success.
pub const GEOLOCATION_UNAVAILABLE: &str = "Invalid IP address or unable to fetch geolocation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// DNS, connect, timeout or any other failure before a response arrived.
    Transport,
    /// A response arrived but signalled failure, by HTTP status or payload.
    UpstreamRejection,
    /// The body did not have the expected JSON shape.
    MalformedResponse,
}

/// Failure of a single lookup. Only ever displayed, never recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    kind: LookupErrorKind,
    message: String,
}

impl LookupError {
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Transport, message)
    }

    pub fn upstream_rejection(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::UpstreamRejection, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::MalformedResponse, message)
    }

    pub fn kind(&self) -> LookupErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}
