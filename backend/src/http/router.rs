//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{landing, predict, trends};

/// Prediction forms are a handful of numbers.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive; the service has no authenticated surface
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(landing::GET_INDEX, get(handlers::index))
        .route(trends::GET_TRENDS_PAGE, get(handlers::trends_page))
        .route(predict::POST_PREDICT, post(handlers::predict))
        .route(trends::GET_SAMPLE_DATA, get(handlers::sample_data))
        .route(landing::GET_CATEGORIES, get(handlers::categories))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Predictor;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Predictor::disabled("test"), None, (2021..=2024).collect());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
