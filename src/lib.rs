pub mod config;
pub mod document;
pub mod error;
pub mod ollama;
pub mod page;
pub mod qa;
pub mod server;
pub mod util;

pub use config::AppConfig;
pub use error::{PdfQaError, Result};
