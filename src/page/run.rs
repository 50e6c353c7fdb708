use crate::document::{combine_texts, UploadedFile};
use crate::error::Result;
use crate::qa::{answer_question, truncate_context};
use crate::{log_info, log_warn};

use super::{AnswerBlock, PageView, RenderCycle, ERROR_PREFIX};

impl RenderCycle {
    /// Run one render cycle.
    ///
    /// Extraction errors fail the cycle. Model errors become an
    /// [`AnswerBlock::Error`] line on an otherwise complete page.
    pub async fn run(&self, uploads: Vec<UploadedFile>, question: Option<String>) -> Result<PageView> {
        let question = question.unwrap_or_default();

        if uploads.is_empty() {
            return Ok(PageView {
                question,
                ..PageView::default()
            });
        }

        let loader = self.loader.clone();
        let documents = tokio::task::spawn_blocking(move || loader.load(&uploads))
            .await
            .map_err(std::io::Error::other)??;

        let mut view = PageView {
            documents,
            show_question: true,
            question,
            answer: None,
        };

        if view.question.is_empty() {
            return Ok(view);
        }

        let combined = combine_texts(&view.documents);
        let context = truncate_context(&combined, self.context_char_limit);
        log_info!("Thinking locally with {}...", self.model);

        let answer = match answer_question(self.backend.as_ref(), &self.model, context, &view.question).await {
            Ok(answer) => AnswerBlock::Answer(answer),
            Err(e) => {
                log_warn!("Model call failed: {}", e);
                AnswerBlock::Error(format!("{}{}", ERROR_PREFIX, e))
            }
        };
        view.answer = Some(answer);

        Ok(view)
    }
}
