//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID (`x-request-id`) is attached to every request span
//! - Metrics are cheap (atomic increments); a no-op until an exporter is installed

pub mod logging;
pub mod metrics;

use thiserror::Error;

/// Failure to install a logging or metrics backend.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}
