use anyhow::{Context, Result};

/// Sentinel value shipped as the default public key. A deployment that never
/// set `EMAILJS_PUBLIC_KEY` is treated as unconfigured, not broken.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_EMAILJS_PUBLIC_KEY";

const DEFAULT_SERVICE_ID: &str = "service_portfolio";
const DEFAULT_TEMPLATE_ID: &str = "template_contact";
const DEFAULT_RECIPIENT: &str = "portfolio-contact@example.com";

/// Credentials for the email delivery provider, passed explicitly into the
/// submission manager rather than read from globals at call time.
#[derive(Debug, Clone)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Address the contact template delivers to.
    pub recipient: String,
}

impl EmailCredentials {
    /// True iff all three provider credentials are present and the public key
    /// is not the shipped placeholder. Used for a passive UI warning only;
    /// an unconfigured submit is still attempted and rejected by the provider.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.public_key.is_empty()
            && self.public_key != PLACEHOLDER_PUBLIC_KEY
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub email: EmailCredentials,
    /// Absent key degrades the assistant to a fixed offline reply.
    pub gemini_api_key: Option<String>,
    /// Absent URL falls back to the in-process recovery store.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            email: EmailCredentials {
                service_id: env_or("EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID),
                template_id: env_or("EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
                public_key: env_or("EMAILJS_PUBLIC_KEY", PLACEHOLDER_PUBLIC_KEY),
                recipient: env_or("CONTACT_RECIPIENT", DEFAULT_RECIPIENT),
            },
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Returns None for unset or empty variables so blank `.env` lines do not
/// masquerade as real credentials.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(service: &str, template: &str, key: &str) -> EmailCredentials {
        EmailCredentials {
            service_id: service.to_string(),
            template_id: template.to_string(),
            public_key: key.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }

    #[test]
    fn placeholder_public_key_is_not_configured() {
        let creds = credentials("service_abc", "template_xyz", PLACEHOLDER_PUBLIC_KEY);
        assert!(!creds.is_configured());
    }

    #[test]
    fn empty_credentials_are_not_configured() {
        assert!(!credentials("", "template_xyz", "pk_123").is_configured());
        assert!(!credentials("service_abc", "", "pk_123").is_configured());
        assert!(!credentials("service_abc", "template_xyz", "").is_configured());
    }

    #[test]
    fn complete_credentials_are_configured() {
        let creds = credentials("service_abc", "template_xyz", "pk_123");
        assert!(creds.is_configured());
    }
}
