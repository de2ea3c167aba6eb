//! Canonical path redirect middleware.
//! Answers document navigations on non-canonical paths with a 308.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::normalize::{request_url, Decision};
use crate::observability::metrics;

pub async fn normalize_paths(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let decision = match request_url(&parts, &state.normalize) {
        Ok(url) => state.normalizer.decide(&parts.method, &parts.headers, &url),
        Err(e) => {
            tracing::debug!(
                request_id = %request_id(&parts.headers),
                path = %parts.uri.path(),
                error = %e,
                "Skipping path normalization"
            );
            Decision::Continue
        }
    };

    match decision {
        Decision::Continue => next.run(Request::from_parts(parts, body)).await,
        Decision::Redirect(target) => {
            tracing::debug!(
                request_id = %request_id(&parts.headers),
                from = %parts.uri,
                to = %target,
                "Redirecting to canonical path"
            );
            metrics::record_redirect();
            Redirect::permanent(target.as_str()).into_response()
        }
    }
}
