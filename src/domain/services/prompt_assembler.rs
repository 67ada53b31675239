use crate::domain::Turn;

/// Flattens a conversation into the single text block sent to the model.
///
/// Each prior turn becomes a `User: ...` line followed by an `AI: ...` line, in
/// chronological order. The new question is appended last with a bare `AI:`
/// cue so the model continues as the assistant. The whole history is always
/// included; nothing is truncated.
pub struct PromptAssembler;

impl PromptAssembler {
    pub const USER_PREFIX: &'static str = "User: ";
    pub const ASSISTANT_PREFIX: &'static str = "AI:";

    pub fn assemble(history: &[Turn], question: &str) -> String {
        let cue = format!(
            "{}{}\n{}",
            Self::USER_PREFIX,
            question,
            Self::ASSISTANT_PREFIX
        );

        if history.is_empty() {
            return cue;
        }

        let context = history
            .iter()
            .map(|turn| {
                format!(
                    "{}{}\n{} {}",
                    Self::USER_PREFIX,
                    turn.question(),
                    Self::ASSISTANT_PREFIX,
                    turn.answer()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("{context}\n{cue}")
    }
}
