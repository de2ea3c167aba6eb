//! The redirect decision.

use axum::http::{HeaderMap, Method};
use url::Url;

use crate::config::NormalizeConfig;
use crate::normalize::path::{canonical_path, has_file_extension, is_document_request};

/// Outcome of normalizing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Serve the request as-is.
    Continue,
    /// Answer with a 308 to this URL.
    Redirect(Url),
}

/// Decides whether a document navigation should be redirected to its
/// canonical path.
///
/// Holds only immutable settings; `decide` never touches shared state.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    exempt_prefixes: Vec<String>,
}

impl PathNormalizer {
    /// Create a normalizer that leaves paths under `exempt_prefixes` alone.
    pub fn new(exempt_prefixes: Vec<String>) -> Self {
        Self { exempt_prefixes }
    }

    pub fn from_config(config: &NormalizeConfig) -> Self {
        Self::new(config.exempt_prefixes.clone())
    }

    /// Evaluate the request. First matching exit wins.
    pub fn decide(&self, method: &Method, headers: &HeaderMap, url: &Url) -> Decision {
        if method != Method::GET {
            return Decision::Continue;
        }

        if !is_document_request(headers) {
            return Decision::Continue;
        }

        let path = url.path();
        if path == "/" {
            return Decision::Continue;
        }

        if self.exempt_prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            return Decision::Continue;
        }

        if has_file_extension(path) {
            return Decision::Continue;
        }

        let normalized = canonical_path(path);
        if normalized == path {
            return Decision::Continue;
        }

        let mut target = url.clone();
        target.set_path(&normalized);
        Decision::Redirect(target)
    }
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::from_config(&NormalizeConfig::default())
    }
}
