//! # Domain Layer
//!
//! Conversation models, request settings and the prompt assembler.
//! This layer is independent of external frameworks and infrastructure.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
