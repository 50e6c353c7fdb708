// src/page/mod.rs
//! One full pass of upload, extraction and answering, and its HTML view

mod markdown;
mod new;
mod run;
mod render_html;

pub use render_html::{render_error_page, render_page, ANSWER_LABEL, ERROR_PREFIX};

use std::sync::Arc;

use serde::Serialize;

use crate::document::{BatchLoader, ExtractedDocument};
use crate::ollama::ChatBackend;

/// What the answer area shows after a render cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AnswerBlock {
    Answer(String),
    Error(String),
}

/// Everything one render cycle produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub documents: Vec<ExtractedDocument>,
    /// Shown once at least one file was uploaded
    pub show_question: bool,
    pub question: String,
    pub answer: Option<AnswerBlock>,
}

/// Recomputes the page from scratch for every submitted form.
///
/// Holds no state between cycles: extraction and answering always run again.
#[derive(Clone)]
pub struct RenderCycle {
    loader: BatchLoader,
    backend: Arc<dyn ChatBackend>,
    model: String,
    context_char_limit: usize,
}

impl std::fmt::Debug for RenderCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCycle")
            .field("loader", &self.loader)
            .field("model", &self.model)
            .field("context_char_limit", &self.context_char_limit)
            .finish_non_exhaustive()
    }
}
