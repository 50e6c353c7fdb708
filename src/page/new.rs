use std::sync::Arc;

use crate::document::BatchLoader;
use crate::ollama::ChatBackend;

use super::RenderCycle;

impl RenderCycle {
    pub fn new(
        loader: BatchLoader,
        backend: Arc<dyn ChatBackend>,
        model: impl Into<String>,
        context_char_limit: usize,
    ) -> Self {
        Self {
            loader,
            backend,
            model: model.into(),
            context_char_limit,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
