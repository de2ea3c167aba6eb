//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign x-request-id)
//!     → middleware/normalize.rs (308 to canonical path, or pass)
//!     → handlers.rs (landing page, health, 404)
//!     → response.rs (HTML responses)
//!     → middleware/security_headers.rs (hardening headers)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
