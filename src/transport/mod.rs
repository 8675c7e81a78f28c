mod errors;
mod http;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::filters::QueryParams;

pub use errors::TransportError;
pub use http::HttpTransport;

/// Body of `GET /transactions`, decoded as loosely as possible.
///
/// Shape checks (`success`, list-shaped `data`) are left to the caller so that every
/// transport fails the same way on a malformed answer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub message: Option<String>
}

impl TransactionsResponse {
    /// Total number of matching transactions reported by the backend, if it sent a usable one.
    pub fn total_count(&self) -> Option<u64> {
        match self.total.as_ref()? {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None
        }
    }
}

/// Source of transaction pages. Implementations own timeouts and authentication.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn fetch_transactions(&self, query: &QueryParams) -> Result<TransactionsResponse, TransportError>;
}
