use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

/// Resolves on SIGINT/SIGTERM; passed to axum's graceful shutdown
#[cfg(unix)]
pub async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to setup SIGTERM handler: {}", e);
            return ctrl_c().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {
            info!("SIGTERM received, initiating graceful shutdown");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
    }
}

/// On Windows only Ctrl+C is supported
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    ctrl_c().await
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received, initiating shutdown"),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
