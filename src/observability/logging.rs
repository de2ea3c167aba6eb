//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise `observability.log_level` applies to
//! this crate and to `tower_http` request spans.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::observability::ObservabilityError;

/// Install the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(&config.log_level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init()?,
    }
    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("worksheets_site={level},tower_http={level}")
}
