//! # Flatboard Binary
//!
//! The entry point that assembles the application from configuration.

use std::sync::Arc;

use anyhow::Context;
use configs::{LogFormat, LogSettings, Settings};
use fb_api::AppState;
use fb_core::BoardService;
use fb_db_json::JsonBoardRepo;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log);

    // 1. Open the flat-file store
    let repo = JsonBoardRepo::open(&settings.storage.path).await?;

    // 2. Inject it into the service and share through the router state
    let state = AppState {
        boards: BoardService::new(Arc::new(repo)),
    };
    let app = fb_api::router(state);

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 Flatboard starting on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server exited with error")?;

    tracing::info!("Flatboard stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
