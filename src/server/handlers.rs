use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::document::UploadedFile;
use crate::error::{PdfQaError, Result};
use crate::log_debug;
use crate::ollama::OllamaStatus;
use crate::page::{render_page, PageView};

use super::AppState;

pub(super) async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&PageView::default(), state.cycle.model()))
}

pub(super) async fn submit(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Html<String>> {
    let cycle_id = Uuid::new_v4();
    let span = tracing::info_span!("render_cycle", %cycle_id);

    async move {
        let (uploads, question) = read_form(multipart).await?;
        log_debug!(
            "Form carried {} uploads, question present: {}",
            uploads.len(),
            question.as_deref().is_some_and(|q| !q.is_empty())
        );

        let view = state.cycle.run(uploads, question).await?;
        Ok(Html(render_page(&view, state.cycle.model())))
    }
    .instrument(span)
    .await
}

pub(super) async fn health(State(state): State<Arc<AppState>>) -> Json<OllamaStatus> {
    Json(state.ollama.check_status(state.cycle.model()).await)
}

/// Collect uploads and the question from the submitted form.
///
/// A file input left empty still sends a nameless, empty part; it is skipped.
async fn read_form(mut multipart: Multipart) -> Result<(Vec<UploadedFile>, Option<String>)> {
    let mut uploads = Vec::new();
    let mut question = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }

                let upload = UploadedFile::new(file_name, bytes);
                if !upload.has_pdf_extension() {
                    return Err(PdfQaError::UnsupportedUpload(upload.name));
                }
                uploads.push(upload);
            }
            "question" => {
                question = Some(field.text().await.map_err(multipart_error)?);
            }
            other => log_debug!("Ignoring form field '{}'", other),
        }
    }

    Ok((uploads, question))
}

fn multipart_error(e: MultipartError) -> PdfQaError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        PdfQaError::PayloadTooLarge(e.body_text())
    } else {
        PdfQaError::Upload(e.body_text())
    }
}
