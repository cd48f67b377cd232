use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::ChatTurn;
use crate::errors::AppError;
use crate::navigation::SectionInfo;
use crate::profile::{self, Profile};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_profile() -> Json<Profile> {
    Json(profile::profile())
}

#[derive(Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<SectionInfo>,
    pub active: Option<String>,
}

/// GET /api/v1/navigation/sections
/// Section registry for nav hydration, in document order.
pub async fn handle_sections(State(state): State<AppState>) -> Json<SectionsResponse> {
    Json(SectionsResponse {
        sections: state.tracker.sections(),
        active: state.tracker.active_section(),
    })
}

#[derive(Deserialize)]
pub struct ScrollRequest {
    pub offset: f64,
}

#[derive(Serialize)]
pub struct ActiveSectionResponse {
    pub active: Option<String>,
}

/// POST /api/v1/navigation/scroll
/// Scroll-offset feed from the client; returns the resulting active section.
pub async fn handle_scroll(
    State(state): State<AppState>,
    Json(req): Json<ScrollRequest>,
) -> Json<ActiveSectionResponse> {
    Json(ActiveSectionResponse {
        active: state.tracker.record_scroll(req.offset),
    })
}

#[derive(Deserialize)]
pub struct ActivateRequest {
    pub id: String,
}

/// POST /api/v1/navigation/active
/// Direct activation from a nav-link click, ahead of the smooth scroll.
pub async fn handle_activate(
    State(state): State<AppState>,
    Json(req): Json<ActivateRequest>,
) -> Result<StatusCode, AppError> {
    if !state.tracker.activate(&req.id) {
        return Err(AppError::Validation(format!(
            "Unknown section '{}'",
            req.id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/v1/assistant/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }
    let text = state
        .assistant
        .ask(&req.message, &req.history)
        .await
        .map_err(|e| AppError::Assistant(e.to_string()))?;
    Ok(Json(ChatResponse { text }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::assistant::AssistantClient;
    use crate::config::{Config, EmailCredentials, PLACEHOLDER_PUBLIC_KEY};
    use crate::contact::manager::SubmissionManager;
    use crate::contact::store::{MemoryRecoveryStore, RecoveryStore};
    use crate::email_client::{EmailJsClient, EmailSender};
    use crate::navigation::{SectionBounds, SectionTracker, Subscription};

    fn test_state() -> (AppState, Vec<Subscription>) {
        let credentials = EmailCredentials {
            service_id: "service_portfolio".to_string(),
            template_id: "template_contact".to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            recipient: "owner@example.com".to_string(),
        };
        let manager = Arc::new(SubmissionManager::new(
            Arc::new(EmailJsClient::new().unwrap()) as Arc<dyn EmailSender>,
            Arc::new(MemoryRecoveryStore::new()) as Arc<dyn RecoveryStore>,
            credentials.clone(),
        ));
        let tracker = SectionTracker::new(80.0);
        let subs = vec![
            tracker.observe("hero", "Home", SectionBounds::new(0.0, 800.0)),
            tracker.observe("about", "About", SectionBounds::new(800.0, 1600.0)),
        ];
        let state = AppState {
            manager,
            assistant: AssistantClient::new(None).unwrap(),
            tracker,
            config: Config {
                email: credentials,
                gemini_api_key: None,
                redis_url: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
        };
        (state, subs)
    }

    #[tokio::test]
    async fn scroll_feed_drives_the_sections_endpoint() {
        let (state, _subs) = test_state();

        let scrolled = handle_scroll(
            State(state.clone()),
            Json(ScrollRequest { offset: 900.0 }),
        )
        .await;
        assert_eq!(scrolled.0.active.as_deref(), Some("about"));

        let sections = handle_sections(State(state)).await;
        assert_eq!(sections.0.active.as_deref(), Some("about"));
    }

    #[tokio::test]
    async fn nav_click_activation_is_reflected_and_validated() {
        let (state, _subs) = test_state();

        let status = handle_activate(
            State(state.clone()),
            Json(ActivateRequest {
                id: "hero".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.tracker.active_section().as_deref(), Some("hero"));

        let err = handle_activate(
            State(state),
            Json(ActivateRequest {
                id: "missing".to_string(),
            }),
        )
        .await;
        assert!(matches!(err, Err(AppError::Validation(_))));
    }
}
