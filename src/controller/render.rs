//! Result text written into the view

use crate::form::{PricingView, ResultSlot};
use crate::pricing::{format_price, PricingResponse};

pub const CALL_BS_PLACEHOLDER: &str = "Call Option Price (Black-Scholes): $XX.XX";
pub const PUT_BS_PLACEHOLDER: &str = "Put Option Price (Black-Scholes): $XX.XX";
pub const CALL_MC_PLACEHOLDER: &str = "Call Option Price (Monte Carlo): $XX.XX";
pub const PUT_MC_PLACEHOLDER: &str = "Put Option Price (Monte Carlo): $XX.XX";
pub const IMPLIED_VOL_PLACEHOLDER: &str = "Implied Volatility: XX.XX%";

/// Write the fixed price placeholders, plus the implied-volatility one when asked
pub fn write_placeholders(view: &dyn PricingView, with_implied_volatility: bool) {
    view.write_result(ResultSlot::CallPriceBs, CALL_BS_PLACEHOLDER);
    view.write_result(ResultSlot::PutPriceBs, PUT_BS_PLACEHOLDER);
    view.write_result(ResultSlot::CallPriceMc, CALL_MC_PLACEHOLDER);
    view.write_result(ResultSlot::PutPriceMc, PUT_MC_PLACEHOLDER);

    if with_implied_volatility {
        view.write_result(ResultSlot::ImpliedVolatility, IMPLIED_VOL_PLACEHOLDER);
    }
}

/// Text for each price slot of a backend response
pub fn response_lines(response: &PricingResponse) -> [(ResultSlot, String); 4] {
    [
        (
            ResultSlot::CallPriceBs,
            format!("Call Price (BS): {}", format_price(response.call_price_bs)),
        ),
        (
            ResultSlot::PutPriceBs,
            format!("Put Price (BS): {}", format_price(response.put_price_bs)),
        ),
        (
            ResultSlot::CallPriceMc,
            format!("Call Price (MC): {}", format_price(response.call_price_mc)),
        ),
        (
            ResultSlot::PutPriceMc,
            format!("Put Price (MC): {}", format_price(response.put_price_mc)),
        ),
    ]
}

pub fn write_response(view: &dyn PricingView, response: &PricingResponse) {
    for (slot, text) in response_lines(response) {
        view.write_result(slot, &text);
    }
}
