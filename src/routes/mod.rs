//! HTTP route handlers.
//!
//! A single meaningful route (`GET /`) serves the health page. Unmatched
//! paths get an explicit 404 error page rather than the framework default,
//! and non-GET methods on `/` get 405 from the method router.

pub mod health;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::error::AppError;
use crate::middleware::access_log_layer;
use crate::state::AppState;

/// Fallback for unmatched paths: a uniform 404 error page.
async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with the health route and explicit fallback.
pub fn create_router(state: AppState) -> Router {
    // Health page - never cached, probes must see the live instance
    let health_routes = Router::new()
        .route("/", get(health::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        .with_state(state)
        // Access log middleware - creates the per-request span
        .layer(axum::middleware::from_fn(access_log_layer))
}
