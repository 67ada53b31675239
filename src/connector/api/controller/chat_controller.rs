use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::application::SubmitOutcome;
use crate::cli::{ReplCommand, REPL_HELP};
use crate::domain::{ChatModel, ChatSettings, ConversationStore, Credential, Session, Turn};

use super::super::Container;

pub const MISSING_KEY_WARNING: &str =
    "Warning: please enter a valid Groq API key with /key <KEY> to proceed.";

/// Interactive read-eval-print loop over one [`Session`].
pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Read lines from `input` until EOF or `/quit`, writing everything the
    /// user should see to `out`. Returns the session so callers can inspect
    /// the final conversation.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<Session>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut session = self.container.new_session();
        let mut interaction = self.container.interaction_loop();
        let mut lines = input.lines();

        writeln!(
            out,
            "Groq Chat ({}). Type /help for commands.",
            session.settings().model()
        )?;

        loop {
            if !session.has_credential() {
                writeln!(out, "{MISSING_KEY_WARNING}")?;
            }
            write!(out, "You: ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            let command = match ReplCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{e}. Type /help for commands.")?;
                    continue;
                }
            };
            debug!("REPL command: {:?}", redact(&command));

            match command {
                ReplCommand::Ask(question) => {
                    let spinner = pending_spinner();
                    let outcome = interaction.submit(&mut session, &question).await;
                    spinner.finish_and_clear();

                    match outcome {
                        SubmitOutcome::Answered(turn) => writeln!(out, "{}", render_answer(&turn))?,
                        // A missing key is warned about before the next prompt.
                        SubmitOutcome::Skipped(_) => {}
                    }
                }
                ReplCommand::SetKey(key) => match Credential::new(key) {
                    Ok(credential) => {
                        session.set_credential(credential);
                        writeln!(out, "API key set.")?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                },
                ReplCommand::SetModel(model) => {
                    session.settings_mut().set_model(model);
                    writeln!(out, "Model set to {model}.")?;
                }
                ReplCommand::SetTemperature(value) => {
                    match session.settings_mut().set_temperature(value) {
                        Ok(()) => writeln!(out, "Temperature set to {value}.")?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
                ReplCommand::SetMaxTokens(value) => {
                    match session.settings_mut().set_max_tokens(value) {
                        Ok(()) => writeln!(out, "Max tokens set to {value}.")?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
                ReplCommand::Models => {
                    writeln!(out, "{}", render_models(session.settings().model()))?
                }
                ReplCommand::Settings => {
                    writeln!(
                        out,
                        "{}",
                        render_settings(session.settings(), session.has_credential())
                    )?
                }
                ReplCommand::History => {
                    writeln!(out, "{}", render_transcript(session.conversation()))?
                }
                ReplCommand::Recent => writeln!(out, "{}", render_recent(session.conversation()))?,
                ReplCommand::Clear => {
                    interaction.clear_history(&mut session);
                    writeln!(out, "Chat history cleared.")?;
                }
                ReplCommand::Help => writeln!(out, "{REPL_HELP}")?,
                ReplCommand::Quit => break,
            }
        }

        Ok(session)
    }
}

fn redact(command: &ReplCommand) -> ReplCommand {
    match command {
        ReplCommand::SetKey(_) => ReplCommand::SetKey("***".to_string()),
        other => other.clone(),
    }
}

fn pending_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn render_answer(turn: &Turn) -> String {
    format!("AI: {}", turn.answer())
}

/// Every turn in chronological order.
pub fn render_transcript(conversation: &ConversationStore) -> String {
    if conversation.is_empty() {
        return "No conversation yet.".to_string();
    }

    conversation
        .all()
        .iter()
        .map(|turn| format!("You: {}\n{}\n---", turn.question(), render_answer(turn)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of previous questions, newest first.
pub fn render_recent(conversation: &ConversationStore) -> String {
    if conversation.is_empty() {
        return "No previous conversations.".to_string();
    }

    let mut output = String::from("Previous Conversations");
    for (i, turn) in conversation.recent_first().into_iter().enumerate() {
        output.push_str(&format!("\n{}. {}", i + 1, turn.question()));
    }
    output
}

pub fn render_models(current: ChatModel) -> String {
    ChatModel::ALL
        .iter()
        .map(|model| {
            let marker = if *model == current { "*" } else { " " };
            format!("{marker} {model}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_settings(settings: &ChatSettings, has_credential: bool) -> String {
    format!(
        "Model:       {}\nTemperature: {}\nMax tokens:  {}\nAPI key:     {}",
        settings.model(),
        settings.temperature(),
        settings.max_tokens(),
        if has_credential { "set" } else { "not set" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            mock: true,
            ..ContainerConfig::default()
        })
        .unwrap()
    }

    fn keyless_container() -> Container {
        Container::new(ContainerConfig::default()).unwrap()
    }

    async fn run_script(container: &Container, script: &str) -> (Session, String) {
        let mut out = Vec::new();
        let session = ChatController::new(container)
            .run(script.as_bytes(), &mut out)
            .await
            .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_questions_are_answered_and_recorded() {
        let container = mock_container();

        let (session, output) = run_script(&container, "hello\nagain\n/quit\n").await;

        assert_eq!(session.conversation().len(), 2);
        assert!(output.contains("AI: You said: hello"));
        assert!(output.contains("AI: You said: again"));
    }

    #[tokio::test]
    async fn test_questions_keep_their_whitespace() {
        let container = mock_container();

        let (session, _) = run_script(&container, "  spaced out \r\n\n//etc/hosts\n").await;

        let questions: Vec<_> = session
            .conversation()
            .all()
            .iter()
            .map(|t| t.question())
            .collect();
        assert_eq!(questions, vec!["  spaced out ", "/etc/hosts"]);
    }

    #[tokio::test]
    async fn test_warns_and_blocks_without_key() {
        let container = keyless_container();

        let (session, output) = run_script(&container, "hello\n").await;

        assert!(session.conversation().is_empty());
        assert!(output.contains(MISSING_KEY_WARNING));
    }

    #[tokio::test]
    async fn test_clear_command_resets_history() {
        let container = mock_container();

        let (session, output) = run_script(&container, "one\ntwo\n/clear\n").await;

        assert!(session.conversation().is_empty());
        assert!(output.contains("Chat history cleared."));
    }

    #[tokio::test]
    async fn test_invalid_setting_is_reported() {
        let container = mock_container();

        let (session, output) = run_script(&container, "/temperature 3\n").await;

        assert!(output.contains("temperature must be between"));
        assert!((session.settings().temperature() - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_unknown_command_hint() {
        let container = mock_container();

        let (_, output) = run_script(&container, "/nope\n").await;

        assert!(output.contains("unknown command '/nope'"));
        assert!(output.contains("Type /help"));
    }

    #[test]
    fn test_render_recent_numbers_newest_first() {
        let mut store = ConversationStore::new();
        store.append(Turn::new("first", "1"));
        store.append(Turn::new("second", "2"));

        assert_eq!(
            render_recent(&store),
            "Previous Conversations\n1. second\n2. first"
        );
    }

    #[test]
    fn test_render_transcript() {
        let mut store = ConversationStore::new();
        store.append(Turn::new("What is 2+2?", "4"));

        assert_eq!(render_transcript(&store), "You: What is 2+2?\nAI: 4\n---");
        assert_eq!(
            render_transcript(&ConversationStore::new()),
            "No conversation yet."
        );
    }

    #[test]
    fn test_render_models_marks_current() {
        let listing = render_models(ChatModel::Gemma7b);
        assert!(listing.contains("* gemma-7b-it"));
        assert!(listing.contains("  llama3-8b-8192"));
    }
}
