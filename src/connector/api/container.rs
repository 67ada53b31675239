use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionClient, InteractionLoop};
use crate::connector::adapter::{EchoChatClient, GroqClient};
use crate::domain::{ChatModel, ChatSettings, Credential, Session};

/// Placeholder key handed to the session in `--mock` mode when none is given.
const MOCK_API_KEY: &str = "mock-key";

pub struct ContainerConfig {
    /// Groq API key. `None` leaves the session without a credential until the
    /// user supplies one.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: ChatModel,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Answer locally with [`EchoChatClient`] instead of calling the API.
    pub mock: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        let settings = ChatSettings::default();
        Self {
            api_key: None,
            base_url: GroqClient::configured_base_url(),
            model: settings.model(),
            temperature: settings.temperature(),
            max_tokens: settings.max_tokens(),
            timeout_secs: None,
            mock: false,
        }
    }
}

pub struct Container {
    completion_client: Arc<CompletionClient>,
    settings: ChatSettings,
    credential: Option<Credential>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using offline echo chat client");
            Arc::new(EchoChatClient::new())
        } else {
            let timeout = config.timeout_secs.map(Duration::from_secs);
            debug!(
                "Using Groq chat client at {} (timeout: {:?})",
                config.base_url, timeout
            );
            Arc::new(GroqClient::new(&config.base_url, timeout))
        };

        Self::with_chat_client(config, chat_client)
    }

    /// Build around an already constructed [`ChatClient`].
    pub fn with_chat_client(
        config: ContainerConfig,
        chat_client: Arc<dyn ChatClient>,
    ) -> Result<Self> {
        let settings = ChatSettings::new(config.model, config.temperature, config.max_tokens)?;

        let credential = match config.api_key.as_deref().map(Credential::new) {
            Some(Ok(credential)) => Some(credential),
            Some(Err(e)) => {
                warn!("Ignoring configured API key: {e}");
                None
            }
            None => None,
        };
        let credential = match credential {
            None if config.mock => Some(Credential::new(MOCK_API_KEY)?),
            other => other,
        };

        Ok(Self {
            completion_client: Arc::new(CompletionClient::new(chat_client)),
            settings,
            credential,
        })
    }

    pub fn completion_client(&self) -> Arc<CompletionClient> {
        self.completion_client.clone()
    }

    pub fn interaction_loop(&self) -> InteractionLoop {
        InteractionLoop::new(self.completion_client.clone())
    }

    /// A fresh session seeded with the configured key and settings.
    pub fn new_session(&self) -> Session {
        let session = Session::new(self.settings);
        match self.credential.clone() {
            Some(credential) => session.with_credential(credential),
            None => session,
        }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }
}
