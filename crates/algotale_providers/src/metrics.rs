//! Metrics for story-generation API calls.
//!
//! Provides OpenTelemetry-based metrics for tracking provider performance
//! and failures across all driver implementations.

use algotale_error::ProviderErrorKind;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<StoryMetrics> = OnceLock::new();

/// Metrics for provider interactions.
///
/// Tracks requests, failures, latency, and token usage for all providers.
/// Metrics are labeled with provider (groq, gemini, etc.) and model name.
#[derive(Clone)]
pub struct StoryMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Total provider requests
    pub requests: Counter<u64>,
    /// Failed provider requests
    pub failures: Counter<u64>,
    /// Provider call duration in seconds
    pub duration: Histogram<f64>,
    /// Total tokens used, when reported
    pub tokens_used: Counter<u64>,
}

impl StoryMetrics {
    fn init() -> Self {
        let meter = global::meter("algotale_providers");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("story.requests")
                .with_description("Total provider requests")
                .build(),
            failures: meter
                .u64_counter("story.failures")
                .with_description("Failed provider requests")
                .build(),
            duration: meter
                .f64_histogram("story.duration")
                .with_unit("seconds")
                .with_description("Provider call duration")
                .build(),
            tokens_used: meter
                .u64_counter("story.tokens")
                .with_description("Total tokens used")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful provider request.
    pub fn record_request(&self, provider: &str, model: &str, duration_secs: f64) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(duration_secs, labels);
    }

    /// Record a failed provider request.
    pub fn record_failure(&self, provider: &str, model: &str, kind: &ProviderErrorKind) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("failure", classify_failure(kind)),
        ];
        self.failures.add(1, labels);
    }

    /// Record token usage from a provider response.
    pub fn record_tokens(&self, model: &str, total_tokens: u64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.tokens_used.add(total_tokens, labels);
    }
}

impl Default for StoryMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

/// Classify a failure kind for metrics labeling.
///
/// Returns one of: "not_configured", "timeout", "transport", "api",
/// "content_rejected", "empty_or_short", "response_conversion".
pub fn classify_failure(kind: &ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::NotConfigured(_) => "not_configured",
        ProviderErrorKind::Timeout(_) => "timeout",
        ProviderErrorKind::Transport(_) => "transport",
        ProviderErrorKind::Api { .. } => "api",
        ProviderErrorKind::ContentRejected(_) => "content_rejected",
        ProviderErrorKind::EmptyOrShort { .. } => "empty_or_short",
        ProviderErrorKind::ResponseConversion(_) => "response_conversion",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn failure_labels_are_stable() {
        assert_eq!(
            classify_failure(&ProviderErrorKind::Timeout(Duration::from_secs(30))),
            "timeout"
        );
        assert_eq!(
            classify_failure(&ProviderErrorKind::NotConfigured("groq".to_string())),
            "not_configured"
        );
        assert_eq!(
            classify_failure(&ProviderErrorKind::EmptyOrShort { len: 10, min: 100 }),
            "empty_or_short"
        );
    }
}
