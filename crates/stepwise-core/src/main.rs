use std::path::Path;
use std::sync::Arc;

use stepwise_core::limits::EngineConfig;
use stepwise_core::mcp::McpState;
use stepwise_core::server::serve;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries responses only.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("STEPWISE_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match std::env::var("STEPWISE_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading config from {path}");
            EngineConfig::load(Path::new(&path))?
        }
        Err(_) => EngineConfig::default(),
    };
    tracing::info!(
        max_request_bytes = config.limits.max_request_bytes,
        max_batch_size = config.limits.max_batch_size,
        worker_threads = config.limits.worker_threads,
        "Starting stepwise server on stdio"
    );

    let state = Arc::new(McpState::new(config.limits)?);
    serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), state).await?;
    Ok(())
}
