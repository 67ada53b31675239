pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, CompletionClient, InteractionLoop, LoopState, SkipReason, SubmitOutcome,
};

pub use cli::{Commands, OutputFormat, ReplCommand};

pub use connector::{ChatController, Container, ContainerConfig, EchoChatClient, GroqClient, Router};

pub use domain::{
    ChatModel, ChatSettings, ConversationStore, Credential, DomainError, PromptAssembler,
    RequestConfig, Session, Turn,
};
