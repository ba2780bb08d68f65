pub mod analyze;
pub mod health;

use std::convert::Infallible;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::limit::ConcurrencyLimitLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;
    let max_in_flight = state.config.max_concurrent_requests.max(1);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(analyze::handle_analyze)
                .layer::<_, Infallible>(ConcurrencyLimitLayer::new(max_in_flight))
                .layer::<_, Infallible>(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}
