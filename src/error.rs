use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfQaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to extract PDF text from {file}: {message}")]
    Extraction { file: String, message: String },

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Upload exceeds the configured size limit: {0}")]
    PayloadTooLarge(String),

    #[error("Only PDF files are accepted, got: {0}")]
    UnsupportedUpload(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Inference(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PdfQaError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PdfQaError::Upload(_) => StatusCode::BAD_REQUEST,
            PdfQaError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            PdfQaError::UnsupportedUpload(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            PdfQaError::Http(_) | PdfQaError::Inference(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PdfQaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = %status, "render cycle failed: {}", self);
        let body = crate::page::render_error_page(status, &self.to_string());
        (status, Html(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PdfQaError>;
