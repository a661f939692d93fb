//! Instance Manager - Run isolated copies of a desktop application side by side
//!
//! Clones a template installation into per-instance folders, tracks them in a JSON
//! registry and exposes create/rename/delete/start/stop/open-folder over HTTP.

mod api;
mod core;
mod persistence;
mod platform;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{port, InstanceManager, Settings};

/// Application name constant
pub const APP_NAME: &str = "Instance Manager";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay before the browser is pointed at the UI
const BROWSER_DELAY: Duration = Duration::from_millis(1500);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let settings = Settings::from_env()?;

    // Ensure the registry and instances directories exist
    std::fs::create_dir_all(&settings.state_dir)
        .with_context(|| format!("Failed to create state directory {:?}", settings.state_dir))?;
    std::fs::create_dir_all(&settings.instances_dir).with_context(|| {
        format!(
            "Failed to create instances directory {:?}",
            settings.instances_dir
        )
    })?;

    let manager = Arc::new(InstanceManager::new(settings.clone()));

    let (start_port, attempts) = (settings.start_port, settings.port_attempts);
    let port = tokio::task::spawn_blocking(move || port::find_free_port(start_port, attempts))
        .await
        .context("Port scan task failed")??;

    let listener = tokio::net::TcpListener::bind((settings.bind_host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", settings.bind_host, port))?;

    let url = format!("http://localhost:{}", port);
    info!("Server:    {}", url);
    info!("Port:      {}", port);
    info!("Template:  {:?}", settings.template_dir);
    info!("Instances: {:?}", settings.instances_dir);
    info!("Registry:  {:?}", settings.registry_path());

    if settings.open_browser {
        tokio::spawn(open_browser(url));
    }

    axum::serve(listener, api::router(manager))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("instance_manager=info,tower_http=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the UI in the default browser once the server is accepting connections
async fn open_browser(url: String) {
    tokio::time::sleep(BROWSER_DELAY).await;
    let result = tokio::task::spawn_blocking(move || open::that(&url)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("Failed to open browser: {}", e),
        Err(e) => warn!("Browser task failed: {}", e),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
}
