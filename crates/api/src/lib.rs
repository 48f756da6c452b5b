//! # PetMatch App
//!
//! Web application layer - HTTP handlers, HTML rendering and the server
//! entry point.
//!
//! This crate contains:
//! - Handlers for browser actions and JSON lookups
//! - Application context (dependency injection)
//! - The per-browser session registry
//! - Server-side HTML rendering
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Every browser action is a POST followed by a redirect to the tab page

pub mod commands;
pub mod context;
pub mod render;
pub mod sessions;
pub mod utils;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

pub use context::AppContext;

/// Build the application router.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(commands::pages::index))
        .route("/search", post(commands::search::submit_search))
        .route("/page", post(commands::search::change_page))
        .route("/select", post(commands::navigation::select))
        .route("/back", post(commands::navigation::back))
        .route("/favorites/add", post(commands::favorites::add))
        .route("/favorites/remove", post(commands::favorites::remove))
        .route("/api/breeds/{animal_type}", get(commands::lookups::breeds))
        .route("/api/organizations", get(commands::lookups::organizations))
        .route("/health", get(commands::health::health))
        .with_state(ctx)
}

/// Bind the configured address and serve until a shutdown signal arrives.
///
/// # Errors
/// Fails if the listener cannot be bound or the server stops abnormally.
pub async fn serve(ctx: Arc<AppContext>) -> std::io::Result<()> {
    let address = format!("{}:{}", ctx.config.server.bind_address, ctx.config.server.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(%address, "PetMatch listening");

    axum::serve(listener, build_router(ctx)).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
