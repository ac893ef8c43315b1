use clap::Parser;
use options_form::cli::{Cli, Commands};
use options_form::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    options_form::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Price(args) => {
            tracing::info!(endpoint = %config.api.endpoint(), "Submitting pricing form");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Endpoint: {}", config.api.endpoint());
            match config.api.timeout_secs {
                Some(secs) => println!("  Timeout: {}s", secs),
                None => println!("  Timeout: none"),
            }
            println!("  Variant: {:?}", config.controller.variant);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
