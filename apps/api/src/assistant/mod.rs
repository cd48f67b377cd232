/// Assistant client — the single point of entry for the portfolio chat
/// widget's AI calls, wrapping the Gemini `generateContent` API.
///
/// The assistant is a stateless request/response oracle: the caller sends the
/// new message plus a short rolling history and gets free text back. Nothing
/// is retried or persisted here.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Oldest turns beyond this are dropped before the request is built.
const MAX_HISTORY_TURNS: usize = 10;

/// Reply used when no API key is deployed. Degrading beats throwing.
pub const OFFLINE_MESSAGE: &str =
    "The portfolio assistant is offline right now. Please reach out through the contact form instead.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("assistant returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

/// One prior exchange in the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    api_key: Option<String>,
}

impl AssistantClient {
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    pub fn is_online(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one message with its rolling history and returns the reply text.
    /// Without a deployed API key this resolves to `OFFLINE_MESSAGE`.
    pub async fn ask(&self, message: &str, history: &[ChatTurn]) -> Result<String, AssistantError> {
        let Some(api_key) = &self.api_key else {
            return Ok(OFFLINE_MESSAGE.to_string());
        };

        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: prompts::system_instruction(),
                }],
            },
            contents: build_contents(message, history),
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AssistantError::EmptyContent)?;

        debug!("Assistant reply received ({} chars)", text.len());
        Ok(text)
    }
}

/// Caps history at the most recent turns and appends the new user message.
fn build_contents(message: &str, history: &[ChatTurn]) -> Vec<GeminiContent> {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    let mut contents: Vec<GeminiContent> = history[start..]
        .iter()
        .map(|turn| GeminiContent {
            role: Some(
                match turn.role {
                    TurnRole::User => "user",
                    TurnRole::Model => "model",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart {
                text: turn.text.clone(),
            }],
        })
        .collect();
    contents.push(GeminiContent {
        role: Some("user".to_string()),
        parts: vec![GeminiPart {
            text: message.to_string(),
        }],
    });
    contents
}
