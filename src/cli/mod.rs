mod repl;

use clap::{Subcommand, ValueEnum};

pub use repl::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default)
    Chat,

    /// Ask a single question with no prior history and print the answer
    Ask {
        question: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the supported models
    Models,
}
