//! CLI interface for options-form
//!
//! Provides subcommands for:
//! - `price`: Fill the pricing form and submit it
//! - `config`: Show the effective configuration

mod price;

pub use price::PriceArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "options-form")]
#[command(about = "Submit an option pricing form to a pricing backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill the form and submit it
    Price(PriceArgs),
    /// Show configuration
    Config,
}
