use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::EmailCredentials;
use crate::contact::models::{ContactSubmission, DeliveryOutcome, PersistedSubmission};
use crate::contact::store::RecoveryStore;
use crate::email_client::{EmailRequest, EmailSender};

/// Fixed store key for the single recovery record.
pub const RECOVERY_KEY: &str = "portfolio_contact_form_data";

/// Records older than this are stale: evicted on read, never returned.
pub const FRESHNESS_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Mediates between validated form data and the email delivery provider.
///
/// A failed attempt is never silently lost within the freshness window: the
/// submission is written to the recovery store and offered back on the next
/// page load. Store failures themselves are best-effort and swallowed;
/// losing the recovery record is acceptable, losing the ability to retry is
/// not.
///
/// No mutual exclusion is enforced. Two concurrent submits race independently
/// and the last store write wins; the UI disables its submit control to keep
/// that theoretical.
pub struct SubmissionManager {
    sender: Arc<dyn EmailSender>,
    store: Arc<dyn RecoveryStore>,
    credentials: EmailCredentials,
}

impl SubmissionManager {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        store: Arc<dyn RecoveryStore>,
        credentials: EmailCredentials,
    ) -> Self {
        Self {
            sender,
            store,
            credentials,
        }
    }

    /// Dispatches one submission to the provider. Exactly one of
    /// {clear recovery record, write recovery record} happens per call.
    ///
    /// Content validation is the caller's precondition; only structural
    /// completeness is checked before the provider request is built. An
    /// unconfigured deployment still dispatches and lets the provider reject.
    pub async fn submit(&self, data: &ContactSubmission) -> DeliveryOutcome {
        if let Some(field) = data.missing_field() {
            self.persist(data).await;
            return DeliveryOutcome::failure(format!("submission field '{field}' is empty"));
        }

        let request = EmailRequest::new(&self.credentials, data);

        match self.sender.send(&request).await {
            Ok(()) => {
                self.clear().await;
                DeliveryOutcome::success()
            }
            Err(e) => {
                warn!("Email dispatch failed: {e}");
                self.persist(data).await;
                DeliveryOutcome::failure(e.to_string())
            }
        }
    }

    /// Writes the recovery record, bumping `attempt_count` past any fresh
    /// existing record. Best-effort: store failures are logged and swallowed.
    pub async fn persist(&self, data: &ContactSubmission) {
        let attempt_count = match self.get_persisted().await {
            Some(existing) => existing.attempt_count + 1,
            None => 1,
        };

        let record = PersistedSubmission {
            submission: data.clone(),
            timestamp: Utc::now().timestamp_millis(),
            attempt_count,
        };

        let serialized = match serde_json::to_string(&record) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize recovery record: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(RECOVERY_KEY, &serialized).await {
            warn!("Failed to persist recovery record: {e}");
        } else {
            debug!(attempt_count, "Recovery record written");
        }
    }

    /// Returns the fresh recovery record, if any. Stale and malformed
    /// records are evicted on read and reported as absent; eviction is
    /// read-triggered, there is no background sweep.
    pub async fn get_persisted(&self) -> Option<PersistedSubmission> {
        let raw = match self.store.get(RECOVERY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read recovery record: {e}");
                return None;
            }
        };

        let record: PersistedSubmission = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Evicting malformed recovery record: {e}");
                self.clear().await;
                return None;
            }
        };

        if Utc::now().timestamp_millis() - record.timestamp >= FRESHNESS_WINDOW_MS {
            debug!("Evicting stale recovery record");
            self.clear().await;
            return None;
        }

        Some(record)
    }

    /// Deletes the recovery record unconditionally; absence is not an error.
    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(RECOVERY_KEY).await {
            warn!("Failed to clear recovery record: {e}");
        }
    }

    /// Passive configuration probe for the UI warning banner.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }
}
