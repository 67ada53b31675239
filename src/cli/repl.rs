use crate::domain::{ChatModel, DomainError};

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Anything that is not a slash command.
    Ask(String),
    SetKey(String),
    SetModel(ChatModel),
    SetTemperature(f32),
    SetMaxTokens(u32),
    Models,
    Settings,
    History,
    Recent,
    Clear,
    Help,
    Quit,
}

pub const REPL_HELP: &str = "\
Commands:
  /key <KEY>           set the Groq API key
  /model <NAME>        switch model (see /models)
  /models              list supported models
  /temperature <0-1>   set sampling temperature
  /max-tokens <50-500> set the output token limit
  /settings            show current settings
  /history             show the full conversation
  /recent              list previous questions, newest first
  /clear               delete the conversation history
  /help                show this help
  /quit, /exit         leave
Anything else is sent as a question, exactly as typed. Start a line with //
to send a question that begins with a slash.";

impl ReplCommand {
    /// `line` must already have its line terminator removed. Questions are
    /// kept verbatim; surrounding whitespace only matters for commands.
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Ok(ReplCommand::Ask(line.to_string()));
        };
        if rest.starts_with('/') {
            return Ok(ReplCommand::Ask(rest.to_string()));
        }
        let rest = rest.trim_end();

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "key" => Ok(ReplCommand::SetKey(require_arg(name, arg)?.to_string())),
            "model" => Ok(ReplCommand::SetModel(require_arg(name, arg)?.parse()?)),
            "temperature" | "temp" => {
                let value = require_arg(name, arg)?;
                value.parse::<f32>().map(ReplCommand::SetTemperature).map_err(|_| {
                    DomainError::invalid_input(format!("'{value}' is not a number"))
                })
            }
            "max-tokens" | "max_tokens" | "tokens" => {
                let value = require_arg(name, arg)?;
                value.parse::<u32>().map(ReplCommand::SetMaxTokens).map_err(|_| {
                    DomainError::invalid_input(format!("'{value}' is not a whole number"))
                })
            }
            "models" => Ok(ReplCommand::Models),
            "settings" => Ok(ReplCommand::Settings),
            "history" => Ok(ReplCommand::History),
            "recent" => Ok(ReplCommand::Recent),
            "clear" => Ok(ReplCommand::Clear),
            "help" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            other => Err(DomainError::invalid_input(format!(
                "unknown command '/{other}'"
            ))),
        }
    }
}

fn require_arg<'a>(name: &str, arg: &'a str) -> Result<&'a str, DomainError> {
    if arg.is_empty() {
        return Err(DomainError::invalid_input(format!(
            "/{name} needs a value"
        )));
    }
    Ok(arg)
}
