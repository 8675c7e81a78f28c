use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::config::Config;
use crate::filters::QueryParams;
use crate::transport::{TransactionsResponse, Transport, TransportError};

/// [`Transport`] over the admin REST API.
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: String,
    api_token: Option<String>
}

impl HttpTransport {
    const TRANSACTIONS_PATH: &'static str = "/transactions";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| TransportError::Client(error.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = Self::new(config.api_url.clone(), config.timeout)?;

        Ok(match &config.api_token {
            Some(token) => transport.with_token(token.clone()),
            None => transport
        })
    }

    /// Sends `token` as a bearer credential on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn transactions_url(&self, query: &QueryParams) -> String {
        format!("{}{}?{}", self.base_url, Self::TRANSACTIONS_PATH, query.to_query_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_transactions(&self, query: &QueryParams) -> Result<TransactionsResponse, TransportError> {
        let url = self.transactions_url(query);
        debug!("GET {url}");

        let mut request = self.http_client.get(&url);

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Transactions request failed with HTTP {}: {}", status.as_u16(), body);
            return Err(TransportError::Status { status: status.as_u16(), body });
        }

        Ok(response.json::<TransactionsResponse>().await?)
    }
}
