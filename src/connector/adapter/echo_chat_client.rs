use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{DomainError, PromptAssembler, RequestConfig};

/// Offline [`ChatClient`] that answers by echoing the latest question.
///
/// Deterministic, needs no key validity and no network. Used with `--mock`.
pub struct EchoChatClient;

impl EchoChatClient {
    pub fn new() -> Self {
        Self
    }

    /// The text of the last `User:` line in the prompt.
    fn latest_question(user: &str) -> &str {
        user.lines()
            .rev()
            .find_map(|line| {
                line.strip_prefix("Question: ")
                    .unwrap_or(line)
                    .strip_prefix(PromptAssembler::USER_PREFIX)
            })
            .unwrap_or(user)
            .trim()
    }
}

impl Default for EchoChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for EchoChatClient {
    async fn complete(
        &self,
        _system: &str,
        user: &str,
        config: &RequestConfig,
    ) -> Result<String, DomainError> {
        let question = Self::latest_question(user);
        debug!("EchoChatClient answering '{}' as {}", question, config.model());
        Ok(format!("You said: {question}"))
    }
}
