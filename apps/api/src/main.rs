mod assistant;
mod config;
mod contact;
mod email_client;
mod errors;
mod navigation;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::AssistantClient;
use crate::config::Config;
use crate::contact::manager::SubmissionManager;
use crate::contact::store::{MemoryRecoveryStore, RecoveryStore, RedisRecoveryStore};
use crate::email_client::{EmailJsClient, EmailSender};
use crate::navigation::{SectionBounds, SectionTracker, Subscription};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if !config.email.is_configured() {
        // Passive warning only; submissions are still attempted and the
        // provider rejects them itself.
        warn!("Email delivery credentials are missing or placeholders");
    }

    // Recovery store: Redis when configured, otherwise process-local
    let store: Arc<dyn RecoveryStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisRecoveryStore::open(url)?),
        None => {
            info!("REDIS_URL not set; using in-memory recovery store");
            Arc::new(MemoryRecoveryStore::new())
        }
    };

    // Email delivery client and submission manager
    let sender: Arc<dyn EmailSender> = Arc::new(EmailJsClient::new()?);
    let manager = Arc::new(SubmissionManager::new(
        sender,
        store,
        config.email.clone(),
    ));
    info!("Submission manager initialized");

    // Assistant client (offline without a key)
    let assistant = AssistantClient::new(config.gemini_api_key.clone())?;
    info!(
        "Assistant client initialized (online: {})",
        assistant.is_online()
    );

    // Section tracker seeded with the page layout in document order
    let tracker = SectionTracker::new(80.0);
    let _section_subscriptions = register_sections(&tracker);

    let state = AppState {
        manager,
        assistant,
        tracker,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Registers the known page sections with nominal one-viewport bands. The
/// client refines real pixel bounds; the registry itself drives the nav.
fn register_sections(tracker: &Arc<SectionTracker>) -> Vec<Subscription> {
    const NOMINAL_SECTION_HEIGHT: f64 = 800.0;

    profile::SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (id, label))| {
            let top = i as f64 * NOMINAL_SECTION_HEIGHT;
            tracker.observe(
                *id,
                *label,
                SectionBounds::new(top, top + NOMINAL_SECTION_HEIGHT),
            )
        })
        .collect()
}
