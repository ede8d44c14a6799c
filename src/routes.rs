//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /v1/shortLinks`        - Create a short dynamic link
//! - `POST /v1/exchangeShortLink` - Resolve a short link to its long form
//! - `GET  /health`               - Liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, matching the public API surface
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{create_link_handler, exchange_short_link_handler, health_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let v1 = Router::new()
        .route("/shortLinks", post(create_link_handler))
        .route("/exchangeShortLink", post(exchange_short_link_handler))
        .layer(cors_layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", v1)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(300))
}
