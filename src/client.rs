use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::conversation::Message;

/// Endpoint used when no `--endpoint` flag is given, a locally running
/// completion worker.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8787/";

/// Model name sent with every request by default.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Reply substituted when the endpoint answers successfully but the expected
/// `choices[0].message.content` field is missing or empty.
pub const FALLBACK_REPLY: &str = "Sorry — no response from assistant.";

/// Failure modes of a completion request.
///
/// A missing reply field is deliberately not here: the endpoint answered, so
/// the caller gets [`FALLBACK_REPLY`] and a success.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint answered with a non-success status.
    #[error("endpoint error {status}: {body}")]
    Api { status: u16, body: String },
    /// The request never completed, or its payload could not be read or
    /// parsed.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Common interface for producing an assistant reply from a transcript.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Produce a reply to the given transcript.
    async fn complete(&self, messages: &[Message]) -> Result<String, ClientError>;
}

#[derive(Deserialize)]
struct Completion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<Reply>,
}

#[derive(Deserialize)]
struct Reply {
    content: Option<String>,
}

/// [`ChatClient`] backed by an OpenAI-compatible chat-completions endpoint.
///
/// Each call issues exactly one `POST` of `{"model", "messages"}` and awaits
/// one response. No retry, no backoff, no timeout of its own; the hosting
/// environment may impose one.
pub struct HttpChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpChatClient {
    /// Client for `endpoint` using [`DEFAULT_MODEL`].
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_model(endpoint, DEFAULT_MODEL)
    }

    /// Client for `endpoint` using a custom model name.
    pub fn with_model(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ClientError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
        });
        tracing::trace!(endpoint = %self.endpoint, body = %body, "chat request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "endpoint returned an error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: Completion = response.json().await?;
        let reply = extract_reply(completion);
        tracing::debug!(response = %reply, "chat response");
        Ok(reply)
    }
}

/// Pull `choices[0].message.content` out of a parsed response, substituting
/// [`FALLBACK_REPLY`] when any piece of that path is absent or empty.
fn extract_reply(completion: Completion) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        // An empty reply counts as missing.
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}
