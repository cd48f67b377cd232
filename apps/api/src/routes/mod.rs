pub mod health;
pub mod site;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact submission pipeline
        .route("/api/v1/contact", post(handlers::handle_submit))
        .route(
            "/api/v1/contact/recovery",
            get(handlers::handle_get_recovery).delete(handlers::handle_clear_recovery),
        )
        .route(
            "/api/v1/contact/status",
            get(handlers::handle_config_status),
        )
        // Assistant
        .route("/api/v1/assistant/chat", post(site::handle_chat))
        // Static site data
        .route("/api/v1/profile", get(site::handle_profile))
        // Navigation: section registry plus the client-side feeds that keep
        // the active section current
        .route(
            "/api/v1/navigation/sections",
            get(site::handle_sections),
        )
        .route("/api/v1/navigation/scroll", post(site::handle_scroll))
        .route("/api/v1/navigation/active", post(site::handle_activate))
        .with_state(state)
}
