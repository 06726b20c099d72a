//! Metrics collection and exposition.
//!
//! # Metrics
//! - `review_transitions_total` (counter): review step outcomes by category
//! - `done_transitions_total` (counter): done step outcomes by category
//! - `sessions_active` (gauge): live sessions after each sweep
//!
//! # Design Decisions
//! - Labels carry the rejection category, never the failed rule or any value
//! - Recording is a no-op until an exporter is installed

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_transition(step: &'static str, outcome: &'static str, category: &'static str) {
    let name = match step {
        "review" => "review_transitions_total",
        _ => "done_transitions_total",
    };
    counter!(name, "outcome" => outcome, "category" => category).increment(1);
}

pub fn record_active_sessions(count: usize) {
    gauge!("sessions_active").set(count as f64);
}
