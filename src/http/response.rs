//! HTML responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::site::{render_error, SiteMeta};

/// The error page for `status`, with that status.
pub fn error_page(meta: &SiteMeta, status: StatusCode) -> Response {
    (status, Html(render_error(meta, status))).into_response()
}
