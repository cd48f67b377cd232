use serde::{Deserialize, Serialize};

/// One contact-form submission as entered by the visitor. Transient; the
/// manager takes no ownership of it until dispatch begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Structural completeness only. Field content (lengths, email shape) is
    /// the caller's job via `validation::validate_submission`.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else if self.subject.trim().is_empty() {
            Some("subject")
        } else if self.message.trim().is_empty() {
            Some("message")
        } else {
            None
        }
    }
}

/// Recovery record written when dispatch fails. At most one exists, under a
/// single fixed store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSubmission {
    #[serde(flatten)]
    pub submission: ContactSubmission,
    /// Epoch milliseconds of the most recent failed attempt, not the first.
    pub timestamp: i64,
    /// Strictly increases by one per failed attempt until the record is cleared.
    pub attempt_count: u32,
}

/// Result of one dispatch call. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryOutcome {
    pub success: bool,
    pub message: String,
    /// Diagnostic string for display and logging only; callers must not
    /// branch on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            message: "Message sent successfully! I'll get back to you within 24 hours."
                .to_string(),
            error: None,
        }
    }

    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self {
            success: false,
            message: "Failed to send message. Your data has been saved and you can try again."
                .to_string(),
            error: Some(diagnostic.into()),
        }
    }
}
