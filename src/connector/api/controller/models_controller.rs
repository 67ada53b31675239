use crate::domain::ChatModel;

use super::super::Container;
use super::chat_controller::render_models;

pub struct ModelsController<'a> {
    container: &'a Container,
}

impl<'a> ModelsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn list(&self) -> String {
        let current = self.container.settings().model();
        format!(
            "Supported models (* = selected, default {}):\n{}",
            ChatModel::default(),
            render_models(current)
        )
    }
}
