pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        // Session API
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route("/api/v1/session/config", put(handlers::handle_update_config))
        .route("/api/v1/session/prompts", get(handlers::handle_get_prompts))
        .route(
            "/api/v1/session/questions",
            post(handlers::handle_generate_question),
        )
        .route(
            "/api/v1/session/questions/:index/answer",
            post(handlers::handle_submit_answer),
        )
        .route("/api/v1/session/summary", get(handlers::handle_summary))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .with_state(state)
}
