//! folio-server - HTTP API server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use folio_core::{NotifyConfig, ProfileRecord};
use folio_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("folio_server=debug".parse()?),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("FOLIO_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|_| "FOLIO_PORT must be a valid port number")?;

    // Profile record: bundled by default, overridable from a JSON file
    let profile = match std::env::var("FOLIO_PROFILE_PATH") {
        Ok(path) => {
            info!("Loading profile record from {}", path);
            Arc::new(ProfileRecord::from_json_file(&path)?)
        }
        Err(_) => Arc::new(ProfileRecord::bundled()),
    };

    let notify_config = NotifyConfig::from_env();
    if notify_config.any_sink_configured() {
        info!("Notification delivery enabled");
    } else {
        info!("No notification sinks configured; events will be logged locally");
    }

    let state = AppState::with_profile(profile, notify_config);
    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting folio-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
