//! Remote pricing
//!
//! Request/response schema for the `/api/options-pricing` endpoint and the
//! backend seam the controller submits through.

mod client;
mod types;

pub use client::HttpPricingClient;
pub use types::{format_price, PricingError, PricingRequest, PricingResponse};

use async_trait::async_trait;

/// Trait for pricing backend implementations
#[async_trait]
pub trait PricingBackend: Send + Sync {
    /// Submit one pricing request. No retries.
    async fn price(&self, request: &PricingRequest) -> Result<PricingResponse, PricingError>;
}
