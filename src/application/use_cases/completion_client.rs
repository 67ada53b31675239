use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, RequestConfig};

/// Fixed system instruction sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Please provide responses to user queries.";

/// Prefix placed on failure descriptions so they can be shown in place of an answer.
pub const ERROR_PREFIX: &str = "Error: ";

/// Wraps one call to the completion service behind the two-message template.
///
/// The assembled conversation is embedded as the `Question:` of a single user
/// message; the system message is always [`SYSTEM_PROMPT`].
pub struct CompletionClient {
    chat_client: Arc<dyn ChatClient>,
}

impl CompletionClient {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub fn user_message(prompt_text: &str) -> String {
        format!("Question: {prompt_text}")
    }

    pub async fn complete(
        &self,
        prompt_text: &str,
        config: &RequestConfig,
    ) -> Result<String, DomainError> {
        debug!(
            "Requesting completion from {} (temperature={}, max_tokens={}, prompt_chars={})",
            config.model(),
            config.temperature(),
            config.max_tokens(),
            prompt_text.len()
        );

        let start_time = Instant::now();
        let user = Self::user_message(prompt_text);
        let answer = self.chat_client.complete(SYSTEM_PROMPT, &user, config).await?;

        debug!(
            "Completion received in {:?} ({} chars)",
            start_time.elapsed(),
            answer.len()
        );

        Ok(answer)
    }

    /// Same as [`Self::complete`], but failures come back as display text
    /// starting with [`ERROR_PREFIX`] instead of an `Err`.
    pub async fn complete_or_error_text(&self, prompt_text: &str, config: &RequestConfig) -> String {
        match self.complete(prompt_text, config).await {
            Ok(answer) => answer,
            Err(e) => {
                debug!("Completion failed: {e}");
                error_text(&e)
            }
        }
    }
}

pub fn error_text(error: &DomainError) -> String {
    format!("{ERROR_PREFIX}{error}")
}
