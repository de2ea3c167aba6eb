//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

use worksheets_site::config::SiteConfig;
use worksheets_site::http::HttpServer;
use worksheets_site::lifecycle::Shutdown;

/// Start a server on an ephemeral port. Dropping or triggering the returned
/// `Shutdown` stops it.
pub async fn spawn_server(config: SiteConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = HttpServer::new(config).run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn router(config: SiteConfig) -> Router {
    HttpServer::new(config).router()
}

/// Drive one request through the router in-process.
pub async fn send(router: Router, request: Request<Body>) -> Response {
    router.oneshot(request).await.unwrap()
}

/// A browser-like navigation to `path` on host `w.test`.
pub fn navigation(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("host", "w.test")
        .header("accept", "text/html,application/xhtml+xml,*/*;q=0.8")
        .header("sec-fetch-dest", "document")
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
