use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use crate::estimator::EstimateResult;
use std::time::Duration;

/// Label used for every estimate whose event type did not resolve
pub const UNKNOWN_EVENT_TYPE_LABEL: &str = "unknown";

/// Install the Prometheus recorder.
/// Fails if a recorder is already installed (e.g., in tests)
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Describe all metrics (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!("kasha_estimates_total", "Total number of cost estimates computed");
    describe_counter!(
        "kasha_ai_requests_total",
        "Total number of AI assistant requests"
    );
    describe_histogram!(
        "kasha_ai_request_duration_seconds",
        "AI provider call duration in seconds"
    );
    describe_gauge!("kasha_site_info", "Site backend version information");

    gauge!("kasha_site_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record an estimate. Only catalog ids become label values; unresolved
/// requests share the `unknown` series.
pub fn record_estimate(result: &EstimateResult) {
    let resolved = result.is_resolved();
    let event_type = if resolved {
        result.event_type_id.clone()
    } else {
        UNKNOWN_EVENT_TYPE_LABEL.to_string()
    };
    counter!(
        "kasha_estimates_total",
        "event_type" => event_type,
        "resolved" => resolved.to_string(),
    )
    .increment(1);
}

/// Record an AI request. `outcome` is "ok", "fallback" or "error".
pub fn record_ai_request(feature: &str, outcome: &str) {
    counter!(
        "kasha_ai_requests_total",
        "feature" => feature.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

pub fn record_ai_duration(feature: &str, duration: Duration) {
    histogram!(
        "kasha_ai_request_duration_seconds",
        "feature" => feature.to_string(),
    )
    .record(duration.as_secs_f64());
}
