use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use pdf_qa::config::{AppConfig, DEFAULT_CONFIG_PATH};
use pdf_qa::util::log::init_logger;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdf_qa=info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = AppConfig::load(&config_path)
        .wrap_err_with(|| format!("Failed to load config from {}", config_path.display()))?;
    init_logger(&config.log_dir)
        .wrap_err_with(|| format!("Failed to open log directory {}", config.log_dir.display()))?;

    pdf_qa::server::serve(&config).await?;
    Ok(())
}
