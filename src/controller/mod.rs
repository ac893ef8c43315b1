//! Pricing form controller
//!
//! Handles the two form events: a mode change toggles which input group is
//! visible, a submit either writes placeholder text or prices the form
//! remotely. Overlapping submits are not serialized; whichever finishes
//! last owns the result slots.

mod render;

pub use render::{
    response_lines, CALL_BS_PLACEHOLDER, CALL_MC_PLACEHOLDER, IMPLIED_VOL_PLACEHOLDER,
    PUT_BS_PLACEHOLDER, PUT_MC_PLACEHOLDER,
};

use crate::config::SubmitVariant;
use crate::form::{FieldGroup, PricingView, VolatilityMode};
use crate::pricing::{PricingBackend, PricingError, PricingRequest, PricingResponse};
use crate::telemetry::{self, RemoteOutcome};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// What a submit did to the view
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Placeholder strings were written
    Placeholder { implied_volatility: bool },
    /// The backend answered and its prices were written
    Priced(PricingResponse),
    /// The remote call failed; result slots were left as they were
    Failed,
}

/// Wires a view-model to a pricing backend
pub struct FormController<V, B> {
    view: Arc<V>,
    backend: Arc<B>,
    variant: SubmitVariant,
}

impl<V: PricingView, B: PricingBackend> FormController<V, B> {
    pub fn new(view: Arc<V>, backend: Arc<B>, variant: SubmitVariant) -> Self {
        Self {
            view,
            backend,
            variant,
        }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    pub fn variant(&self) -> SubmitVariant {
        self.variant
    }

    /// Mode selector changed: show exactly one of the two input groups
    pub fn on_mode_change(&self, selected: &str) {
        let mode = VolatilityMode::from_choice(selected);
        let volatility_visible = mode == VolatilityMode::ImpliedVolatility;

        self.view
            .set_visibility(FieldGroup::VolatilitySelection, volatility_visible);
        self.view
            .set_visibility(FieldGroup::MarketPrice, !volatility_visible);

        tracing::debug!(selected, ?mode, "Mode changed");
    }

    /// Submit with the configured variant
    pub async fn submit(&self) -> SubmitOutcome {
        match self.variant {
            SubmitVariant::Placeholder => self.submit_placeholder(),
            SubmitVariant::Remote => self.submit_remote().await,
        }
    }

    /// Write fixed placeholder strings. Never calls the backend.
    pub fn submit_placeholder(&self) -> SubmitOutcome {
        telemetry::record_submission("placeholder");

        let snapshot = self.view.snapshot();
        let implied_volatility = snapshot.mode().solves_implied_volatility();
        render::write_placeholders(&*self.view, implied_volatility);

        tracing::debug!(
            ticker = %snapshot.stock_ticker,
            implied_volatility,
            "Wrote placeholder results"
        );

        SubmitOutcome::Placeholder { implied_volatility }
    }

    /// Price the current form through the backend and render the answer.
    ///
    /// Failures are logged once and leave the view untouched.
    pub async fn submit_remote(&self) -> SubmitOutcome {
        telemetry::record_submission("remote");

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("submit", %request_id);
        self.price_and_render().instrument(span).await
    }

    async fn price_and_render(&self) -> SubmitOutcome {
        let request = PricingRequest::from_snapshot(&self.view.snapshot());
        let started = Instant::now();

        match self.backend.price(&request).await {
            Ok(response) => {
                telemetry::record_remote(RemoteOutcome::Priced, started.elapsed());
                render::write_response(&*self.view, &response);

                tracing::info!(
                    ticker = %request.stock_ticker,
                    call_bs = response.call_price_bs,
                    put_bs = response.put_price_bs,
                    "Rendered pricing response"
                );

                SubmitOutcome::Priced(response)
            }
            Err(e) => {
                let outcome = match e {
                    PricingError::Decode { .. } => RemoteOutcome::DecodeError,
                    PricingError::Client(_) | PricingError::Transport(_) => {
                        RemoteOutcome::TransportError
                    }
                };
                telemetry::record_remote(outcome, started.elapsed());

                tracing::error!(
                    error = %e,
                    ticker = %request.stock_ticker,
                    "Pricing request failed"
                );

                SubmitOutcome::Failed
            }
        }
    }
}
