use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::observability::metrics;

/// Count requests and time them, redirects and errors included.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}
