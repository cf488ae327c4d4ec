use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    // `reason` comes from the API's JSON error body when it sends one
    #[error("HTTP request failed for {url} with status {status}: {reason}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        reason: String,
    },

    #[error("Failed to decode archive response from {0}")]
    Decode(String, #[source] serde_json::Error),
}

impl FetchError {
    /// The HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            FetchError::NetworkRequest(_, e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the request ran into the client's configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::NetworkRequest(_, e) if e.is_timeout())
    }
}
