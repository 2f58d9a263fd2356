use thiserror::Error;

/// Transport-failure code for a request that never reached the server.
pub const ERR_NETWORK: &str = "ERR_NETWORK";

/// Failures surfaced by the API wrappers.
///
/// `Http` means a response arrived with a non-2xx status; `Network` means
/// no response arrived at all. Pages map these to display text in one
/// place (`pages::feedback`); no layer in between rewrites them.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Http { status: u16, body: String },

    #[error("network failure: {code}")]
    Network { code: String },
}

impl ApiError {
    pub fn network(code: impl Into<String>) -> Self {
        Self::Network { code: code.into() }
    }

    /// HTTP status of the failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network { .. } => None,
        }
    }
}
