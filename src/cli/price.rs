//! Price command implementation

use crate::config::{Config, SubmitVariant};
use crate::controller::{FormController, SubmitOutcome};
use crate::form::{FieldGroup, FormSnapshot, InMemoryView, VolatilityMode};
use crate::pricing::HttpPricingClient;
use clap::Args;
use std::io::{BufRead, Write};
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Stock ticker symbol (e.g. AAPL); prompted for when absent
    #[arg(long)]
    pub ticker: Option<String>,

    /// Option strike price; prompted for when absent
    #[arg(long)]
    pub strike: Option<String>,

    /// Time to maturity in weeks; prompted for when absent
    #[arg(long)]
    pub weeks: Option<String>,

    /// Mode: "1"/"implied" to supply a volatility, anything else to solve
    /// implied volatility from a market price
    #[arg(long, default_value = "1")]
    pub choice: String,

    /// Volatility source sent to the backend: implied or historical
    #[arg(long, default_value = "implied")]
    pub vol_choice: String,

    /// Implied volatility, used when --vol-choice is implied
    #[arg(long)]
    pub implied_vol: Option<String>,

    /// Observed option market price, used in market-price mode
    #[arg(long)]
    pub market_price: Option<String>,

    /// Write placeholder results instead of calling the backend
    #[arg(long, conflicts_with = "remote")]
    pub placeholder: bool,

    /// Call the backend regardless of the configured variant
    #[arg(long)]
    pub remote: bool,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let variant = self.variant(config.controller.variant);
        let snapshot = {
            let stdin = std::io::stdin();
            self.read_form(stdin.lock(), std::io::stderr())?
        };

        let view = Arc::new(InMemoryView::new(snapshot.clone()));
        let backend = Arc::new(HttpPricingClient::new(&config.api)?);
        let controller = FormController::new(view.clone(), backend, variant);

        controller.on_mode_change(&snapshot.choice);
        let outcome = controller.submit().await;

        for group in [FieldGroup::VolatilitySelection, FieldGroup::MarketPrice] {
            if view.is_visible(group) == Some(true) {
                println!("Input group: {}", group.element_id());
            }
        }
        for (_, text) in view.results() {
            println!("{}", text);
        }

        if outcome == SubmitOutcome::Failed {
            anyhow::bail!("Pricing request to {} failed", config.api.endpoint());
        }

        Ok(())
    }

    /// Variant after applying the override flags
    pub fn variant(&self, configured: SubmitVariant) -> SubmitVariant {
        if self.placeholder {
            SubmitVariant::Placeholder
        } else if self.remote {
            SubmitVariant::Remote
        } else {
            configured
        }
    }

    /// Build the form from flags, prompting for missing values
    pub fn read_form<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<FormSnapshot> {
        let mut field = |value: &Option<String>, label: &str| -> anyhow::Result<String> {
            match value {
                Some(value) => Ok(value.clone()),
                None => prompt(&mut input, &mut output, label),
            }
        };

        let stock_ticker = field(&self.ticker, "Enter the stock ticker symbol (e.g., AAPL): ")?;
        let strike_price = field(&self.strike, "Enter the option strike price: ")?;
        let maturity = field(
            &self.weeks,
            "Enter the time to option maturity (in weeks): ",
        )?;

        let mode = VolatilityMode::from_choice(&self.choice);
        let implied_volatility = if mode == VolatilityMode::ImpliedVolatility
            && self.vol_choice == "implied"
        {
            field(&self.implied_vol, "Enter the implied volatility (e.g., 0.25): ")?
        } else {
            self.implied_vol.clone().unwrap_or_default()
        };
        let market_price = if mode == VolatilityMode::MarketPrice {
            field(&self.market_price, "Enter the option market price: ")?
        } else {
            self.market_price.clone().unwrap_or_default()
        };

        Ok(FormSnapshot {
            stock_ticker,
            strike_price,
            maturity,
            choice: self.choice.clone(),
            vol_choice: self.vol_choice.clone(),
            implied_volatility,
            market_price,
        })
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> anyhow::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
