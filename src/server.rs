// ABOUTME: HTTP server assembly and lifecycle with request tracing and graceful shutdown
// ABOUTME: Merges domain routers, renders unknown paths as not-found envelopes, and serves on a TCP port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server lifecycle
//!
//! [`router`] builds the complete application so tests can drive it with
//! `tower::ServiceExt::oneshot`; [`run`] connects the store and serves it
//! until SIGINT or SIGTERM.

use crate::config::environment::ServerConfig;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::routes::{BooleanRoutes, HealthRoutes};
use crate::store::Store;
use anyhow::{Context, Result};
use axum::{http::Uri, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the application router over shared resources
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(BooleanRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .fallback(handle_unknown_route)
        .layer(TraceLayer::new_for_http())
}

async fn handle_unknown_route(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Connect the store and serve HTTP until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the store is unreachable, the port cannot be bound, or
/// the server fails while running
pub async fn run(config: &ServerConfig) -> Result<()> {
    let store = Store::connect(&config.store)
        .await
        .context("Failed to initialize store")?;
    info!("Store backend ready: {}", store.backend_name());

    let resources = Arc::new(ServerResources::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", config.http_port))?;

    serve(listener, resources).await
}

/// Serve the application on an already bound listener
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let local_addr = listener.local_addr().context("Listener has no local address")?;
    info!("HTTP server listening on http://{local_addr}");

    axum::serve(listener, router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolve on SIGINT or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
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
                error!("Failed to install SIGTERM handler: {e}");
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

    info!("Shutdown signal received, draining connections");
}
