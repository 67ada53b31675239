use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{DomainError, RequestConfig};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope used by OpenAI-compatible providers.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for Groq's OpenAI-compatible chat completions API.
///
/// Implements [`ChatClient`] so the completion use case stays decoupled from
/// transport and serialization details. The API key, model and sampling
/// parameters come from the per-call [`RequestConfig`]; only the endpoint and
/// the optional timeout are fixed at construction.
///
/// ```text
/// GROQ_BASE_URL=https://api.groq.com/openai
/// ```
///
/// No timeout is applied unless one is given, so a hung request blocks the
/// caller until the server gives up.
pub struct GroqClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_default(),
            url,
        }
    }

    /// `GROQ_BASE_URL`, defaulting to the hosted Groq API.
    pub fn configured_base_url() -> String {
        std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull the provider's message out of an error body, falling back to the
    /// raw body text.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => "no response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        config: &RequestConfig,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: config.model().as_str(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: config.temperature(),
            max_tokens: config.max_tokens(),
        };

        debug!("GroqClient: POST {} model={}", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(config.credential().expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}");
            debug!("GroqClient: error body: {body}");
            return Err(DomainError::api(status.as_u16(), Self::error_message(&body)));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::malformed(format!("failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::malformed("response contained no choices"))?
            .message
            .content
            .ok_or_else(|| DomainError::malformed("response message had no content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = GroqClient::new("https://api.groq.com/openai/", None);
        assert_eq!(client.url(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn test_error_message_uses_provider_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        assert_eq!(GroqClient::error_message(body), "Invalid API Key");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(GroqClient::error_message("  upstream down "), "upstream down");
        assert_eq!(GroqClient::error_message(""), "no response body");
    }

    #[test]
    fn test_request_serialization() {
        let request = ApiRequest {
            model: "llama3-8b-8192",
            messages: vec![ApiMessage {
                role: "user",
                content: "Question: User: hi\nAI:",
            }],
            temperature: 0.5,
            max_tokens: 150,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 150);
    }
}
