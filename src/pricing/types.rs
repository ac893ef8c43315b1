//! Pricing request and response schema

use crate::form::{parse_number, FormSnapshot, VolatilityChoice, VolatilityMode};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Pricing errors
#[derive(Debug, Error)]
pub enum PricingError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Sending the request or reading the body failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not a valid pricing response
    #[error("Invalid pricing response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Body of a pricing request, built fresh on every submit
#[derive(Debug, Clone, Serialize)]
pub struct PricingRequest {
    pub stock_ticker: String,
    pub strike_price: f64,
    pub time_to_maturity_weeks: f64,
    #[serde(skip)]
    pub volatility_mode: VolatilityMode,
    pub volatility_choice: VolatilityChoice,
    /// Only read when the volatility radio is `implied`
    pub implied_volatility: Option<f64>,
    /// Only read in market-price mode, never sent to the backend
    #[serde(skip)]
    pub market_price: Option<f64>,
}

impl PricingRequest {
    /// Build a request from the raw form values. No validation: malformed
    /// numbers become NaN and travel as JSON `null`.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let volatility_mode = snapshot.mode();
        let volatility_choice = snapshot.volatility_choice();

        let implied_volatility = volatility_choice
            .is_implied()
            .then(|| parse_number(&snapshot.implied_volatility));
        let market_price = (volatility_mode == VolatilityMode::MarketPrice)
            .then(|| parse_number(&snapshot.market_price));

        Self {
            stock_ticker: snapshot.stock_ticker.clone(),
            strike_price: parse_number(&snapshot.strike_price),
            time_to_maturity_weeks: parse_number(&snapshot.maturity),
            volatility_mode,
            volatility_choice,
            implied_volatility,
            market_price,
        }
    }
}

/// Prices returned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PricingResponse {
    pub call_price_bs: f64,
    pub put_price_bs: f64,
    pub call_price_mc: f64,
    pub put_price_mc: f64,
}

impl PricingResponse {
    /// Decode a response body
    pub fn from_body(status: u16, body: &[u8]) -> Result<Self, PricingError> {
        serde_json::from_slice(body).map_err(|source| PricingError::Decode { status, source })
    }
}

/// Format a price with two decimals, rounding half away from zero on the
/// shortest decimal form of the value (`1.005` -> `"1.01"`).
pub fn format_price(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        Err(_) => format!("{:.2}", value),
    }
}
