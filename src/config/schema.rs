//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Page identity (name, canonical URL, theme).
    pub site: SiteMetaConfig,

    /// Canonical path redirects.
    pub normalize: NormalizeConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Identity of the published site.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Brand name shown in the page and the WebSite JSON-LD.
    pub name: String,

    /// Absolute URL used for `rel=canonical` and JSON-LD `url`.
    pub canonical_url: String,

    /// `theme-color` meta value.
    pub theme_color: String,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            name: "i🩷Worksheets".to_string(),
            canonical_url: "https://iloveworksheets.com".to_string(),
            theme_color: "#7c3aed".to_string(),
        }
    }
}

/// Canonical path redirect settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Enable 308 redirects to canonical paths.
    pub enabled: bool,

    /// Path prefixes never rewritten (static files).
    pub exempt_prefixes: Vec<String>,

    /// Scheme assumed for origin-form requests ("http" or "https").
    pub default_scheme: String,

    /// Honour `X-Forwarded-Proto` / `X-Forwarded-Host` from a fronting proxy.
    pub trust_forwarded_headers: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exempt_prefixes: vec![
                "/build/".to_string(),
                "/assets/".to_string(),
                "/fonts/".to_string(),
            ],
            default_scheme: "http".to_string(),
            trust_forwarded_headers: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development.
    Pretty,
    /// One JSON object per line, for log shipping.
    Json,
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}
