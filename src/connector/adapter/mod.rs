mod echo_chat_client;
mod groq_client;

pub use echo_chat_client::*;
pub use groq_client::*;
