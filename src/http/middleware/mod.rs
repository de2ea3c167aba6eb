//! Request middleware, applied by `HttpServer` in this order (outermost first):
//! `track_requests`, `security_headers`, `normalize_paths`.

pub mod metrics;
pub mod normalize;
pub mod security_headers;

pub use self::metrics::track_requests;
pub use normalize::normalize_paths;
pub use security_headers::security_headers;
