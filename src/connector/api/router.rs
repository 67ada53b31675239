use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ModelsController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    models_controller: ModelsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            models_controller: ModelsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { question, format } => self.ask_controller.ask(question, format).await,
            Commands::Models => Ok(self.models_controller.list()),
            Commands::Chat => unreachable!("chat command is handled separately in main"),
        }
    }
}
