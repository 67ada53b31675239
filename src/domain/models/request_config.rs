use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const MIN_MAX_TOKENS: u32 = 50;
pub const MAX_MAX_TOKENS: u32 = 500;
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// The Groq-hosted models the client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatModel {
    #[default]
    Llama3_8b,
    Llama3_70b,
    Mixtral8x7b,
    Gemma7b,
    Mistral7b,
}

impl ChatModel {
    pub const ALL: [ChatModel; 5] = [
        ChatModel::Llama3_8b,
        ChatModel::Llama3_70b,
        ChatModel::Mixtral8x7b,
        ChatModel::Gemma7b,
        ChatModel::Mistral7b,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatModel::Llama3_8b => "llama3-8b-8192",
            ChatModel::Llama3_70b => "llama3-70b-8192",
            ChatModel::Mixtral8x7b => "mixtral-8x7b-32768",
            ChatModel::Gemma7b => "gemma-7b-it",
            ChatModel::Mistral7b => "mistral-7b-instruct",
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|m| m.as_str()).collect();
                DomainError::invalid_input(format!(
                    "unknown model '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })
    }
}

/// An API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(DomainError::missing_credential("API key is empty"));
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

pub fn validate_temperature(temperature: f32) -> Result<f32, DomainError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(DomainError::invalid_input(format!(
            "temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}, got {temperature}"
        )));
    }
    Ok(temperature)
}

pub fn validate_max_tokens(max_tokens: u32) -> Result<u32, DomainError> {
    if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
        return Err(DomainError::invalid_input(format!(
            "max tokens must be between {MIN_MAX_TOKENS} and {MAX_MAX_TOKENS}, got {max_tokens}"
        )));
    }
    Ok(max_tokens)
}

/// Per-call request parameters. Built fresh for every completion call.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    model: ChatModel,
    credential: Credential,
    temperature: f32,
    max_tokens: u32,
}

impl RequestConfig {
    pub fn new(
        model: ChatModel,
        credential: Credential,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            model,
            credential,
            temperature: validate_temperature(temperature)?,
            max_tokens: validate_max_tokens(max_tokens)?,
        })
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Credential {
        Credential::new("gsk_test").unwrap()
    }

    #[test]
    fn test_model_round_trips_through_name() {
        for model in ChatModel::ALL {
            assert_eq!(model.as_str().parse::<ChatModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = "gpt-4o".parse::<ChatModel>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("llama3-8b-8192"));
    }

    #[test]
    fn test_default_model() {
        assert_eq!(ChatModel::default().as_str(), "llama3-8b-8192");
    }

    #[test]
    fn test_blank_credential_rejected() {
        assert!(Credential::new("   ").is_err());
        assert!(Credential::new("").is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let debug = format!("{:?}", Credential::new("gsk_secret").unwrap());
        assert!(!debug.contains("gsk_secret"));
    }

    #[test]
    fn test_request_config_bounds() {
        assert!(RequestConfig::new(ChatModel::default(), key(), 0.0, 50).is_ok());
        assert!(RequestConfig::new(ChatModel::default(), key(), 1.0, 500).is_ok());
        assert!(RequestConfig::new(ChatModel::default(), key(), 1.1, 150).is_err());
        assert!(RequestConfig::new(ChatModel::default(), key(), -0.1, 150).is_err());
        assert!(RequestConfig::new(ChatModel::default(), key(), 0.7, 49).is_err());
        assert!(RequestConfig::new(ChatModel::default(), key(), 0.7, 501).is_err());
    }

    #[test]
    fn test_nan_temperature_rejected() {
        assert!(validate_temperature(f32::NAN).is_err());
    }
}
