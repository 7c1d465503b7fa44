//! # Inventory SOAP Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Client ───► HTTP (8001) ───► Envelope ───► ProductStore ───► SQLite   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inventory_db::Database;
use inventory_soap::{router, SoapConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (RUST_LOG overrides the default filter)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn")),
        )
        .with_target(true)
        .init();

    info!("Starting Inventory SOAP server...");

    let config = SoapConfig::load()?;
    let addr = config.bind_addr()?;
    let service_url = config.service_url();
    info!(
        %addr,
        %service_url,
        db_path = %config.db.database_path.display(),
        "Configuration loaded"
    );

    // Connects and runs migrations
    let db = Database::new(config.db.clone()).await?;
    let (total, applied) = db.migration_status().await?;
    info!(total, applied, "Migration status");

    let listener = TcpListener::bind(addr).await?;
    info!(wsdl = %format!("{}?wsdl", service_url), "Listening");

    axum::serve(listener, router(db.clone(), &service_url))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
