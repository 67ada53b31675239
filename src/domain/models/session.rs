
use super::{
    validate_max_tokens, validate_temperature, ChatModel, ConversationStore, Credential,
    RequestConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
use crate::domain::DomainError;

/// User-adjustable sampling settings. Values are validated on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatSettings {
    model: ChatModel,
    temperature: f32,
    max_tokens: u32,
}

impl ChatSettings {
    pub fn new(model: ChatModel, temperature: f32, max_tokens: u32) -> Result<Self, DomainError> {
        Ok(Self {
            model,
            temperature: validate_temperature(temperature)?,
            max_tokens: validate_max_tokens(max_tokens)?,
        })
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn set_model(&mut self, model: ChatModel) {
        self.model = model;
    }

    pub fn set_temperature(&mut self, temperature: f32) -> Result<(), DomainError> {
        self.temperature = validate_temperature(temperature)?;
        Ok(())
    }

    pub fn set_max_tokens(&mut self, max_tokens: u32) -> Result<(), DomainError> {
        self.max_tokens = validate_max_tokens(max_tokens)?;
        Ok(())
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: ChatModel::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Everything that belongs to one interactive session: the key, the current
/// settings and the conversation so far.
#[derive(Debug, Default)]
pub struct Session {
    credential: Option<Credential>,
    settings: ChatSettings,
    conversation: ConversationStore,
}

impl Session {
    pub fn new(settings: ChatSettings) -> Self {
        Self {
            credential: None,
            settings,
            conversation: ConversationStore::new(),
        }
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ChatSettings {
        &mut self.settings
    }

    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationStore {
        &mut self.conversation
    }

    /// Snapshot the current settings into a request for one call.
    pub fn request_config(&self) -> Result<RequestConfig, DomainError> {
        let credential = self
            .credential
            .clone()
            .ok_or_else(|| DomainError::missing_credential("no API key configured"))?;

        RequestConfig::new(
            self.settings.model,
            credential,
            self.settings.temperature,
            self.settings.max_tokens,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ChatSettings::default();

        assert_eq!(settings.model(), ChatModel::Llama3_8b);
        assert!((settings.temperature() - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.max_tokens(), 150);
    }

    #[test]
    fn test_invalid_setting_leaves_value_unchanged() {
        let mut settings = ChatSettings::default();

        assert!(settings.set_temperature(2.0).is_err());
        assert!(settings.set_max_tokens(10).is_err());

        assert!((settings.temperature() - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.max_tokens(), 150);
    }

    #[test]
    fn test_request_config_requires_credential() {
        let session = Session::default();
        let err = session.request_config().unwrap_err();
        assert!(matches!(err, DomainError::MissingCredential(_)));
    }

    #[test]
    fn test_request_config_reflects_current_settings() {
        let mut session =
            Session::default().with_credential(Credential::new("gsk_test").unwrap());
        session.settings_mut().set_model(ChatModel::Gemma7b);
        session.settings_mut().set_temperature(0.2).unwrap();
        session.settings_mut().set_max_tokens(300).unwrap();

        let config = session.request_config().unwrap();

        assert_eq!(config.model(), ChatModel::Gemma7b);
        assert!((config.temperature() - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens(), 300);
        assert_eq!(config.credential().expose(), "gsk_test");
    }
}
