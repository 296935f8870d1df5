//! HTTP server bootstrap
//!
//! The server exposes no routes of its own: every request falls through to
//! a 404 handler, wrapped in CORS and security header middleware.

pub mod middleware;

use crate::config::ServerConfig;
use crate::core::Logger;
use crate::error::{KageError, Result};
use crate::{info, success};
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

/// Build the application router
pub fn router() -> Router {
    let router = Router::new().fallback(not_found);
    middleware::security_headers(router).layer(middleware::cors())
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}

/// Bind the configured port on all interfaces and serve until Ctrl+C or SIGTERM
pub async fn run(config: &ServerConfig, log: &Logger) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| KageError::bind(addr, e))?;

    success!(log, "Server started on port {}", config.port);

    serve(listener, shutdown_signal()).await?;

    info!(log, "Server stopped");
    Ok(())
}

/// Serve [`router`] on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
