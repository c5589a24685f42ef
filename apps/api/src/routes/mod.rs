pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::distribution::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/distribution/channels",
            get(handlers::handle_list_channels),
        )
        .route(
            "/api/v1/distribution/generate",
            post(handlers::handle_generate),
        )
        .with_state(state)
}
