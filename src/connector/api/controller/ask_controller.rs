use anyhow::{bail, Result};

use crate::application::{SkipReason, SubmitOutcome};
use crate::cli::OutputFormat;
use crate::domain::Turn;

use super::super::Container;
use super::chat_controller::render_answer;

/// One-shot question against an empty history.
pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, question: String, format: OutputFormat) -> Result<String> {
        let mut session = self.container.new_session();
        let mut interaction = self.container.interaction_loop();

        match interaction.submit(&mut session, &question).await {
            SubmitOutcome::Answered(turn) => self.format_turn(&turn, format),
            SubmitOutcome::Skipped(SkipReason::EmptyInput) => bail!("question is empty"),
            SubmitOutcome::Skipped(SkipReason::MissingCredential) => {
                bail!("no API key configured; pass --api-key or set GROQ_API_KEY")
            }
        }
    }

    fn format_turn(&self, turn: &Turn, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => render_answer(turn),
            OutputFormat::Json => serde_json::to_string_pretty(turn)?,
        })
    }
}
