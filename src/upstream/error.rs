use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Feddit answered, but not with a 2xx.
    #[error("Feddit API returned {0}")]
    Status(StatusCode),

    /// Connection refused, DNS failure, timeout.
    #[error("Feddit API unreachable: {0}")]
    Unavailable(#[source] reqwest::Error),

    #[error("Invalid Feddit API payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
