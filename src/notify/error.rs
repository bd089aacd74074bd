use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP call itself failed (DNS, connect, TLS, timeout).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to sign request: {message}")]
    Signing { message: String },
}
