use std::sync::Arc;

use crate::assistant::AssistantClient;
use crate::config::Config;
use crate::contact::manager::SubmissionManager;
use crate::navigation::SectionTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<SubmissionManager>,
    pub assistant: AssistantClient,
    pub tracker: Arc<SectionTracker>,
    /// Full config retained for handlers that need deployment values directly.
    #[allow(dead_code)]
    pub config: Config,
}
