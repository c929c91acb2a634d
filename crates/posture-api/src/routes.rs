//! Router construction.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::handlers;
use crate::middleware::{cors_layer, panic_response};
use crate::state::AppState;

pub fn router(state: AppState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/test", get(handlers::test_analysis))
        .layer(DefaultBodyLimit::max(config.http.max_body_size))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
