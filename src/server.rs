use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

/// Bind to the configured address and serve `app` until SIGINT or SIGTERM.
pub async fn serve(app: Router, bind_address: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind TCP listener to {}", bind_address))?;

    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    tracing::info!("Listening on {}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
