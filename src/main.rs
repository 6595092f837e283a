//! wxr-export - render a JSON content dump as a WXR document
//!
//! Usage: `wxr-export <document.json>`
//!
//! Reads `wxr-export.yml` (optional) and `WXR_EXPORT_*` overrides. In debug
//! mode the document body is printed to stdout; otherwise the attachment is
//! written into the configured output directory.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wxr_export::{
    config::{Config, CONFIG_FILE},
    delivery::DeliveryMode,
    models::ExportDocument,
    services::ExportService,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wxr_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = std::env::args()
        .nth(1)
        .context("usage: wxr-export <document.json>")?;

    let config = Config::load_with_env(Path::new(CONFIG_FILE))?;
    tracing::info!("Configuration loaded");

    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read export data from {}", input))?;
    let document: ExportDocument = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse export data in {}", input))?;
    tracing::info!(
        "Loaded {} posts, {} categories, {} tags",
        document.posts.len(),
        document.categories.len(),
        document.tags.len()
    );

    let service = ExportService::from_config(&config);
    let mode = DeliveryMode::from_config(&config.delivery, chrono::Local::now().date_naive());
    let response = service.deliver(&document, &mode)?;

    match &mode {
        DeliveryMode::Debug => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(response.body.as_bytes())?;
            stdout.flush()?;
        }
        DeliveryMode::Attachment { filename } => {
            let dir = &config.delivery.output_dir;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let path = dir.join(filename);
            std::fs::write(&path, response.body.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "Wrote {} ({} bytes, {})",
                path.display(),
                response.body.len(),
                response.content_type
            );
        }
    }

    Ok(())
}
