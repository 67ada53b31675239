use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use groq_chat::domain::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use groq_chat::{ChatController, ChatModel, Commands, Container, ContainerConfig, GroqClient, Router};

#[derive(Parser)]
#[command(name = "groq-chat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Groq API key [env: GROQ_API_KEY]
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model to use [env: GROQ_MODEL]
    #[arg(short, long, global = true)]
    model: Option<ChatModel>,

    #[arg(short, long, global = true, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Base URL of the OpenAI-compatible endpoint [env: GROQ_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer locally without calling the API
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let model = match cli.model {
        Some(model) => model,
        None => match std::env::var("GROQ_MODEL") {
            Ok(name) => name.parse()?,
            Err(_) => ChatModel::default(),
        },
    };

    let container = Container::new(ContainerConfig {
        api_key: cli.api_key.or_else(|| std::env::var("GROQ_API_KEY").ok()),
        base_url: cli.base_url.unwrap_or_else(GroqClient::configured_base_url),
        model,
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
        timeout_secs: cli.timeout_secs,
        mock: cli.mock,
    })?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            ChatController::new(&container).run(stdin, &mut stdout).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
