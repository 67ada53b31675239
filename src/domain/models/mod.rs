mod conversation;
mod request_config;
mod session;
mod turn;

pub use conversation::*;
pub use request_config::*;
pub use session::*;
pub use turn::*;
