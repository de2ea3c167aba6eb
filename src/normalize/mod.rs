//! Canonical path normalization for document navigations.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, headers, target)
//!     → url.rs (rebuild absolute URL from target + Host)
//!     → decision.rs (GET? document? exempt? file-like?)
//!     → path.rs (collapse slashes, strip trailing '/', '.', whitespace)
//!     → Decision::Continue | Decision::Redirect(url)
//! ```
//!
//! # Design Decisions
//! - The decision is a pure function of one request; no logging in here
//! - Only the path component of the URL is ever rewritten
//! - Redirects are 308 so the client repeats the same method

pub mod decision;
pub mod path;
pub mod url;

pub use decision::{Decision, PathNormalizer};
pub use path::{canonical_path, has_file_extension, is_document_request};
pub use self::url::{request_url, NormalizeError};
