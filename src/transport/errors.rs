use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Backend responded with HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String
    },
    #[error("Failed to decode response: {0}")]
    Decode(String)
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else if error.is_builder() {
            Self::Client(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}
