/// Email delivery client — the single point of entry for contact email
/// dispatch, wrapping the EmailJS REST API.
///
/// No retry lives here: a failed dispatch is recovered by the submission
/// manager persisting the form data, and retry is driven by the visitor
/// resubmitting.
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::EmailCredentials;
use crate::contact::models::ContactSubmission;

const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// Template parameter mapping expected by the contact email template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
    pub reply_to: String,
}

/// Wire request for one dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    /// Maps a submission onto the provider request: fixed recipient from the
    /// credentials, reply-to set to the sender's own address.
    pub fn new(credentials: &EmailCredentials, data: &ContactSubmission) -> Self {
        Self {
            service_id: credentials.service_id.clone(),
            template_id: credentials.template_id.clone(),
            user_id: credentials.public_key.clone(),
            template_params: TemplateParams {
                name: data.name.clone(),
                email: data.email.clone(),
                subject: data.subject.clone(),
                message: data.message.clone(),
                to_email: credentials.recipient.clone(),
                reply_to: data.email.clone(),
            },
        }
    }
}

/// Seam between the submission manager and the delivery provider. Tests
/// substitute a deterministic fake.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, request: &EmailRequest) -> Result<(), EmailError>;
}

/// Production sender backed by the EmailJS HTTP API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
}

impl EmailJsClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, request: &EmailRequest) -> Result<(), EmailError> {
        let response = self
            .client
            .post(EMAILJS_API_URL)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 200 {
            debug!("Email dispatch accepted by provider");
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(EmailError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailCredentials;

    #[test]
    fn request_maps_fields_and_reply_to() {
        let credentials = EmailCredentials {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        let data = ContactSubmission {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "A message long enough".to_string(),
        };

        let request = EmailRequest::new(&credentials, &data);

        assert_eq!(request.service_id, "service_abc");
        assert_eq!(request.user_id, "pk_123");
        assert_eq!(request.template_params.to_email, "owner@example.com");
        assert_eq!(request.template_params.reply_to, "jane@example.com");

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["template_params"]["name"], "Jane Smith");
        assert_eq!(wire["template_params"]["subject"], "Hello there");
    }
}
