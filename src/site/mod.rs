//! The landing page.
//!
//! # Data Flow
//! ```text
//! content.rs (static copy tables)
//!     → render.rs (HTML document, error page)
//!     → json_ld.rs (FAQPage + WebSite structured data)
//!     → String handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Rendering is a pure function of `SiteMeta` and an explicit timestamp
//! - Every text node and attribute is HTML-escaped on output
//! - No client script; anchors are in-page only

pub mod content;
pub mod json_ld;
pub mod render;

pub use render::{render_error, render_home, RenderError};

use crate::config::SiteMetaConfig;

/// Site identity used in the page head and structured data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub name: String,
    pub canonical_url: String,
    pub theme_color: String,
}

impl From<&SiteMetaConfig> for SiteMeta {
    fn from(config: &SiteMetaConfig) -> Self {
        Self {
            name: config.name.clone(),
            canonical_url: config.canonical_url.clone(),
            theme_color: config.theme_color.clone(),
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self::from(&SiteMetaConfig::default())
    }
}
