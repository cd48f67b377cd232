use serde::Serialize;

use crate::contact::models::ContactSubmission;

const MIN_NAME_LEN: usize = 2;
const MIN_SUBJECT_LEN: usize = 5;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Field-shape validation performed before `SubmissionManager::submit`.
/// The manager itself only re-checks structural completeness, so every
/// content rule lives here.
pub fn validate_submission(data: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if data.name.trim().chars().count() < MIN_NAME_LEN {
        errors.push(FieldError {
            field: "name",
            reason: format!("Name must be at least {MIN_NAME_LEN} characters"),
        });
    }

    if !is_rfc_shaped_email(data.email.trim()) {
        errors.push(FieldError {
            field: "email",
            reason: "Email address is not valid".to_string(),
        });
    }

    if data.subject.trim().chars().count() < MIN_SUBJECT_LEN {
        errors.push(FieldError {
            field: "subject",
            reason: format!("Subject must be at least {MIN_SUBJECT_LEN} characters"),
        });
    }

    if data.message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.push(FieldError {
            field: "message",
            reason: format!("Message must be at least {MIN_MESSAGE_LEN} characters"),
        });
    }

    errors
}

/// Shape check only: one `@`, non-empty local part, dotted domain with no
/// whitespace. Deliverability is the provider's problem.
fn is_rfc_shaped_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
