//! Form field and result types

use serde::{Serialize, Serializer};
use std::fmt;

/// Mode selector value: supply a volatility or solve one from a market price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolatilityMode {
    /// Volatility is supplied; the volatility-selection group is shown
    ImpliedVolatility,
    /// Implied volatility is solved from a market price; the market-price field is shown
    MarketPrice,
}

impl VolatilityMode {
    /// Parse the raw selector value. `"1"` and `"implied"` select
    /// `ImpliedVolatility`; anything else selects `MarketPrice`.
    pub fn from_choice(raw: &str) -> Self {
        match raw.trim() {
            "1" | "implied" => VolatilityMode::ImpliedVolatility,
            _ => VolatilityMode::MarketPrice,
        }
    }

    /// True when the placeholder implied-volatility result applies
    pub fn solves_implied_volatility(self) -> bool {
        self == VolatilityMode::MarketPrice
    }
}

/// Volatility radio value inside the volatility-selection group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolatilityChoice {
    Implied,
    Historical,
    /// Unrecognized values are forwarded to the backend untouched
    Other(String),
}

impl VolatilityChoice {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "implied" => VolatilityChoice::Implied,
            "historical" => VolatilityChoice::Historical,
            other => VolatilityChoice::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VolatilityChoice::Implied => "implied",
            VolatilityChoice::Historical => "historical",
            VolatilityChoice::Other(raw) => raw,
        }
    }

    pub fn is_implied(&self) -> bool {
        matches!(self, VolatilityChoice::Implied)
    }
}

impl fmt::Display for VolatilityChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VolatilityChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Raw text of every form field at the moment of a submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub stock_ticker: String,
    pub strike_price: String,
    /// Time to maturity in weeks
    pub maturity: String,
    /// Mode selector
    pub choice: String,
    /// Volatility radio
    pub vol_choice: String,
    pub implied_volatility: String,
    pub market_price: String,
}

impl FormSnapshot {
    pub fn mode(&self) -> VolatilityMode {
        VolatilityMode::from_choice(&self.choice)
    }

    pub fn volatility_choice(&self) -> VolatilityChoice {
        VolatilityChoice::parse(&self.vol_choice)
    }
}

/// Parse a numeric form field. Unparsable text yields NaN, never an error.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Mutually exclusive input groups toggled by the mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    VolatilitySelection,
    MarketPrice,
}

impl FieldGroup {
    pub fn element_id(self) -> &'static str {
        match self {
            FieldGroup::VolatilitySelection => "volatilitySelection",
            FieldGroup::MarketPrice => "marketPrice",
        }
    }
}

/// Named output sinks for result strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultSlot {
    CallPriceBs,
    PutPriceBs,
    CallPriceMc,
    PutPriceMc,
    ImpliedVolatility,
}

impl ResultSlot {
    pub const ALL: [ResultSlot; 5] = [
        ResultSlot::CallPriceBs,
        ResultSlot::PutPriceBs,
        ResultSlot::CallPriceMc,
        ResultSlot::PutPriceMc,
        ResultSlot::ImpliedVolatility,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ResultSlot::CallPriceBs => "callOptionPrice",
            ResultSlot::PutPriceBs => "putOptionPrice",
            ResultSlot::CallPriceMc => "callOptionMC",
            ResultSlot::PutPriceMc => "putOptionMC",
            ResultSlot::ImpliedVolatility => "impliedVolatility",
        }
    }
}
