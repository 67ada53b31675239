use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{error_text, CompletionClient};
use crate::domain::{DomainError, PromptAssembler, Session, Turn};

/// Whether a completion call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Pending,
}

impl LoopState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoopState::Idle)
    }
}

/// Why a submission did not reach the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyInput,
    MissingCredential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The turn that was appended to the conversation. Its answer may be an
    /// error string.
    Answered(Turn),
    Skipped(SkipReason),
}

impl SubmitOutcome {
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            SubmitOutcome::Answered(turn) => Some(turn),
            SubmitOutcome::Skipped(_) => None,
        }
    }
}

/// Drives one session: input in, prompt assembled, completion requested,
/// turn recorded.
pub struct InteractionLoop {
    completion_client: Arc<CompletionClient>,
    state: LoopState,
}

impl InteractionLoop {
    pub fn new(completion_client: Arc<CompletionClient>) -> Self {
        Self {
            completion_client,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// `question` is recorded exactly as given. Only a zero-length string is
    /// treated as empty.
    pub async fn submit(&mut self, session: &mut Session, question: &str) -> SubmitOutcome {
        if question.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Skipped(SkipReason::EmptyInput);
        }

        let config = match session.request_config() {
            Ok(config) => config,
            Err(DomainError::MissingCredential(_)) => {
                debug!("Ignoring submission without an API key");
                return SubmitOutcome::Skipped(SkipReason::MissingCredential);
            }
            Err(e) => {
                // Out-of-range settings are reported like any other failure.
                let turn = Turn::new(question, error_text(&e));
                session.conversation_mut().append(turn.clone());
                return SubmitOutcome::Answered(turn);
            }
        };

        let prompt = PromptAssembler::assemble(session.conversation().all(), question);

        self.state = LoopState::Pending;
        let answer = self
            .completion_client
            .complete_or_error_text(&prompt, &config)
            .await;
        self.state = LoopState::Idle;

        let turn = Turn::new(question, answer);
        session.conversation_mut().append(turn.clone());
        info!(
            "Recorded turn {} (error={})",
            session.conversation().len(),
            turn.is_error()
        );

        SubmitOutcome::Answered(turn)
    }

    pub fn clear_history(&self, session: &mut Session) {
        info!("Clearing {} turns", session.conversation().len());
        session.conversation_mut().clear();
    }
}
