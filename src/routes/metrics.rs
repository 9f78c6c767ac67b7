//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "askbot_webhook_events_total",
        "Inbound webhook events by command"
    );
    metrics::describe_counter!(
        "askbot_completion_attempts_total",
        "Requests made to the completions endpoint by result"
    );
    metrics::describe_histogram!(
        "askbot_completion_duration_seconds",
        "Time to answer an /ask query, retries included"
    );
    metrics::describe_counter!(
        "askbot_messages_sent_total",
        "Telegram sendMessage calls by result"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a classified webhook event
pub fn record_webhook_event(command: &'static str) {
    metrics::counter!("askbot_webhook_events_total", "command" => command).increment(1);
}

/// Record one completions request
pub fn record_completion_attempt(result: &'static str) {
    metrics::counter!("askbot_completion_attempts_total", "result" => result).increment(1);
}

/// Record the duration of a full fetch
pub fn record_completion_duration(duration_secs: f64) {
    metrics::histogram!("askbot_completion_duration_seconds").record(duration_secs);
}

/// Record a sendMessage call
pub fn record_message_sent(result: &'static str) {
    metrics::counter!("askbot_messages_sent_total", "result" => result).increment(1);
}
