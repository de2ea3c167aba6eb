//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method, status
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_redirects_total` (counter): canonical path redirects issued

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::observability::ObservabilityError;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), ObservabilityError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "site_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_redirect() {
    metrics::counter!("site_redirects_total").increment(1);
}
