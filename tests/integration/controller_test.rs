//! End-to-end controller tests against a local HTTP responder

use crate::support::{closed_port_url, serve_once};
use options_form::config::{ApiConfig, SubmitVariant, DEFAULT_PRICING_PATH};
use options_form::controller::{FormController, SubmitOutcome};
use options_form::form::{FieldGroup, FormSnapshot, InMemoryView, PricingView, ResultSlot};
use options_form::pricing::HttpPricingClient;
use std::sync::Arc;

fn form(choice: &str, vol_choice: &str) -> FormSnapshot {
    FormSnapshot {
        stock_ticker: "TSLA".to_string(),
        strike_price: "250".to_string(),
        maturity: "10".to_string(),
        choice: choice.to_string(),
        vol_choice: vol_choice.to_string(),
        implied_volatility: "0.5".to_string(),
        market_price: "12".to_string(),
    }
}

fn controller(
    base_url: String,
    snapshot: FormSnapshot,
    variant: SubmitVariant,
) -> (FormController<InMemoryView, HttpPricingClient>, Arc<InMemoryView>) {
    let view = Arc::new(InMemoryView::new(snapshot));
    let backend = HttpPricingClient::new(&ApiConfig {
        base_url,
        path: DEFAULT_PRICING_PATH.to_string(),
        timeout_secs: None,
    })
    .unwrap();
    let controller = FormController::new(view.clone(), Arc::new(backend), variant);
    (controller, view)
}

#[tokio::test]
async fn test_remote_submit_renders_two_decimals() {
    let (base_url, server) = serve_once(
        200,
        r#"{"call_price_bs": 1.005, "put_price_bs": 2, "call_price_mc": 3.1, "put_price_mc": 4}"#,
    )
    .await;
    let (controller, view) = controller(base_url, form("1", "implied"), SubmitVariant::Remote);

    controller.on_mode_change("1");
    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Priced(_)));

    assert_eq!(view.is_visible(FieldGroup::VolatilitySelection), Some(true));
    assert_eq!(
        view.result(ResultSlot::CallPriceBs).as_deref(),
        Some("Call Price (BS): 1.01")
    );
    assert_eq!(
        view.result(ResultSlot::PutPriceBs).as_deref(),
        Some("Put Price (BS): 2.00")
    );
    assert_eq!(
        view.result(ResultSlot::CallPriceMc).as_deref(),
        Some("Call Price (MC): 3.10")
    );
    assert_eq!(
        view.result(ResultSlot::PutPriceMc).as_deref(),
        Some("Put Price (MC): 4.00")
    );
    assert!(view.result(ResultSlot::ImpliedVolatility).is_none());

    let body = server.await.unwrap().json();
    assert_eq!(body["implied_volatility"], 0.5);
}

#[tokio::test]
async fn test_remote_failure_leaves_results_stale() {
    let (controller, view) = controller(
        closed_port_url().await,
        form("1", "implied"),
        SubmitVariant::Remote,
    );
    view.write_result(ResultSlot::PutPriceMc, "Put Price (MC): 7.77");

    let outcome = controller.submit().await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        view.results(),
        vec![(ResultSlot::PutPriceMc, "Put Price (MC): 7.77".to_string())]
    );
}

#[tokio::test]
async fn test_placeholder_submit_ignores_backend() {
    // Nothing listens here; a network call would fail the submit
    let (controller, view) = controller(
        closed_port_url().await,
        form("2", "historical"),
        SubmitVariant::Placeholder,
    );

    controller.on_mode_change("2");
    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Placeholder {
            implied_volatility: true
        }
    );
    assert_eq!(view.is_visible(FieldGroup::MarketPrice), Some(true));
    assert_eq!(view.write_count(), 5);
    assert_eq!(
        view.result(ResultSlot::ImpliedVolatility).as_deref(),
        Some("Implied Volatility: XX.XX%")
    );
}
