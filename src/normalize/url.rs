//! Absolute URL reconstruction for inbound requests.
//!
//! HTTP/1.1 requests usually carry an origin-form target (`/path?query`),
//! so the scheme and authority have to be recovered from elsewhere before
//! a `Location` header can be built.

use axum::http::{header, request::Parts, uri::Authority};
use thiserror::Error;
use url::Url;

use crate::config::NormalizeConfig;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Failure to turn a request into an absolute URL.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Neither the target, a trusted forwarding header, nor `Host` names an authority.
    #[error("request has no host")]
    MissingHost,
    /// The host is not a bare `host[:port]` authority.
    #[error("invalid request host {0:?}")]
    InvalidHost(String),
    /// The scheme is neither `http` nor `https`.
    #[error("unsupported request scheme {0:?}")]
    InvalidScheme(String),
    /// The reassembled URL does not parse.
    #[error("invalid request url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Rebuild the absolute URL of a request.
pub fn request_url(parts: &Parts, config: &NormalizeConfig) -> Result<Url, NormalizeError> {
    let trusted = config.trust_forwarded_headers;
    let scheme = forwarded(parts, trusted, X_FORWARDED_PROTO)
        .or(parts.uri.scheme_str())
        .unwrap_or(config.default_scheme.as_str());

    let host = forwarded(parts, trusted, X_FORWARDED_HOST)
        .or_else(|| parts.uri.authority().map(|a| a.as_str()))
        .or_else(|| {
            parts
                .headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
        })
        .filter(|h| !h.is_empty())
        .ok_or(NormalizeError::MissingHost)?;

    if !matches!(scheme, "http" | "https") {
        return Err(NormalizeError::InvalidScheme(scheme.to_string()));
    }
    // A '/', '?' or '#' in Host would otherwise leak into the path or query.
    let authority: Authority = host
        .parse()
        .map_err(|_| NormalizeError::InvalidHost(host.to_string()))?;

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let raw = format!("{scheme}://{authority}{path_and_query}");
    Url::parse(&raw).map_err(|source| NormalizeError::InvalidUrl { url: raw, source })
}

fn forwarded<'a>(parts: &'a Parts, trusted: bool, name: &str) -> Option<&'a str> {
    if !trusted {
        return None;
    }
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        // Proxies append, the first entry is the client-facing one.
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
