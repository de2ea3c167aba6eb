use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::http::response::error_page;
use crate::http::server::AppState;
use crate::site::render_home;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// The landing page.
pub async fn home(State(state): State<AppState>) -> Response {
    match render_home(&state.site, Utc::now()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render landing page");
            error_page(&state.site, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    error_page(&state.site, StatusCode::NOT_FOUND)
}
