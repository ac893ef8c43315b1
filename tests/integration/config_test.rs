//! Configuration loading

use options_form::config::{Config, SubmitVariant};
use options_form::telemetry::LogFormat;
use std::io::Write;

#[test]
fn test_config_file_round_trip_to_endpoint() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [api]
        base_url = "https://pricing.example.com/"
        path = "/v2/options-pricing"
        timeout_secs = 3

        [controller]
        variant = "placeholder"

        [telemetry]
        log_level = "debug"
        log_format = "json"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(
        config.api.endpoint(),
        "https://pricing.example.com/v2/options-pricing"
    );
    assert_eq!(config.controller.variant, SubmitVariant::Placeholder);
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
}

#[test]
fn test_missing_api_section_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[telemetry]\nlog_level = \"info\"\n").unwrap();

    assert!(Config::load(file.path()).is_err());
}
