//! i🩷Worksheets site server library.
//!
//! Serves the landing page and redirects document navigations on
//! non-canonical paths (`/grade-1//worksheets/`, `/about.`) to their
//! canonical form with a 308.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod normalize;
pub mod observability;
pub mod site;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use normalize::{Decision, PathNormalizer};
