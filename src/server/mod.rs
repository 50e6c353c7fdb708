//! Local HTTP front end
//!
//! Serves the upload page and runs one render cycle per form submission:
//!
//! - `GET /` - empty page with the upload form
//! - `POST /` - multipart form with `files` and `question`
//! - `GET /health` - Ollama reachability and installed models as JSON

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};

use crate::config::AppConfig;
use crate::document::{BatchLoader, PdfTextExtractor};
use crate::error::Result;
use crate::log_info;
use crate::ollama::OllamaClient;
use crate::page::RenderCycle;

/// Shared, read-only state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub cycle: RenderCycle,
    pub ollama: OllamaClient,
}

impl AppState {
    pub fn new(cycle: RenderCycle, ollama: OllamaClient) -> Self {
        Self { cycle, ollama }
    }

    /// Wire the real PDF extractor and Ollama client from config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let ollama = OllamaClient::new(config.ollama_endpoint.clone(), config.request_timeout())?;
        let loader = BatchLoader::new(Arc::new(PdfTextExtractor))
            .with_temp_dir(config.temp_dir.clone());
        let cycle = RenderCycle::new(
            loader,
            Arc::new(ollama.clone()),
            config.model.clone(),
            config.context_char_limit,
        );
        Ok(Self::new(cycle, ollama))
    }
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = build_router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr: SocketAddr = listener.local_addr()?;
    log_info!("Listening on http://{} (model: {}, ollama: {})", addr, config.model, config.ollama_endpoint);

    axum::serve(listener, app).await?;
    Ok(())
}
