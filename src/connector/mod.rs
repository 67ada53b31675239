//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion transports (Groq HTTP API, offline echo)
//! - The command surface driven by the binary (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
