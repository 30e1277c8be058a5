//! HTTP front-end.
//!
//! Serves the proxy routes over Axum. All handlers share one [`SmiteApi`]
//! instance through [`AppState`].

pub mod error;
pub mod routes;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::SmiteApi;
use crate::error::Result;

pub use error::{ErrorResponse, ProxyError};
pub use routes::routes;

/// Shared application state for route handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<SmiteApi>,
}

impl AppState {
    pub fn new(api: Arc<SmiteApi>) -> Self {
        Self { api }
    }
}

/// Serve the proxy routes on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, api: Arc<SmiteApi>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes(AppState::new(api));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
