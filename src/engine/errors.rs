use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Backend rejected the request: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("Backend response has no transaction list")]
    MalformedData
}
