//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, limits, normalization)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{NormalizeConfig, SiteConfig};
use crate::http::handlers;
use crate::http::middleware::{normalize_paths, security_headers, track_requests};
use crate::http::request::{request_id, UuidRequestId};
use crate::normalize::PathNormalizer;
use crate::site::SiteMeta;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteMeta>,
    pub normalizer: Arc<PathNormalizer>,
    pub normalize: Arc<NormalizeConfig>,
}

impl AppState {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site: Arc::new(SiteMeta::from(&config.site)),
            normalizer: Arc::new(PathNormalizer::from_config(&config.normalize)),
            normalize: Arc::new(config.normalize.clone()),
        }
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    /// Layers added later wrap the ones added before them.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::home))
            .route("/health", get(handlers::health))
            .fallback(handlers::not_found)
            .with_state(state.clone());

        if config.normalize.enabled {
            router = router.layer(from_fn_with_state(state, normalize_paths));
        }
        if config.security.enable_headers {
            router = router.layer(from_fn(security_headers));
        }

        router
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(from_fn(track_requests))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id(request.headers()),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are allowed to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            normalize = self.config.normalize.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
