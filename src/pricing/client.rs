//! HTTP client for the pricing backend

use super::{PricingBackend, PricingError, PricingRequest, PricingResponse};
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::Client;

/// Backend reached over HTTP with a JSON POST
pub struct HttpPricingClient {
    endpoint: String,
    client: Client,
}

impl HttpPricingClient {
    /// Create a client for the configured endpoint.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    pub fn new(config: &ApiConfig) -> Result<Self, PricingError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PricingError::Client)?;

        Ok(Self {
            endpoint: config.endpoint(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PricingBackend for HttpPricingClient {
    async fn price(&self, request: &PricingRequest) -> Result<PricingResponse, PricingError> {
        tracing::debug!(
            url = %self.endpoint,
            ticker = %request.stock_ticker,
            volatility_choice = %request.volatility_choice,
            "Posting pricing request"
        );

        // `.json` sets Content-Type: application/json
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        // Status is not branched on: any body that decodes is a result.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Pricing backend returned non-success status");
        }

        let body = response.bytes().await?;
        PricingResponse::from_body(status.as_u16(), &body)
    }
}
