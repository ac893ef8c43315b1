//! Submission metrics
//!
//! Recorded through the `metrics` facade. Without an installed recorder
//! every call is a no-op.

use std::time::Duration;

/// Submission counter, labelled by variant
pub const SUBMISSIONS_TOTAL: &str = "options_form_submissions_total";
/// Remote outcome counter, labelled by outcome
pub const REMOTE_OUTCOMES_TOTAL: &str = "options_form_remote_outcomes_total";
/// Round trip of a remote pricing request
pub const REMOTE_LATENCY_MS: &str = "options_form_remote_latency_ms";

/// Outcome of a remote pricing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOutcome {
    Priced,
    TransportError,
    DecodeError,
}

impl RemoteOutcome {
    fn as_str(self) -> &'static str {
        match self {
            RemoteOutcome::Priced => "priced",
            RemoteOutcome::TransportError => "transport_error",
            RemoteOutcome::DecodeError => "decode_error",
        }
    }
}

/// Count a form submission
pub fn record_submission(variant: &'static str) {
    metrics::counter!(SUBMISSIONS_TOTAL, "variant" => variant).increment(1);
}

/// Record the result and latency of a remote pricing request
pub fn record_remote(outcome: RemoteOutcome, elapsed: Duration) {
    metrics::counter!(REMOTE_OUTCOMES_TOTAL, "outcome" => outcome.as_str()).increment(1);
    metrics::histogram!(REMOTE_LATENCY_MS).record(elapsed.as_secs_f64() * 1000.0);

    tracing::debug!(
        metric = REMOTE_LATENCY_MS,
        outcome = outcome.as_str(),
        value_ms = elapsed.as_millis() as u64,
        "Recording remote latency"
    );
}
