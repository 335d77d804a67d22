//! Production entry point.
//!
//! # Environment Variables
//!
//! - `HOST`: listening address (default: `127.0.0.1`)
//! - `PORT`: listening port (default: `5000`)
//! - `STORE_URL`: persistence-store connection string (default: `memory:`)
//! - `RUST_LOG`: log filter (e.g. `debug`, `todo_server=debug`)

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::{app, AppState, Config, MemoryStore, TodoStore};

/// Upper bound on a single request/response cycle. Expiry surfaces as an
/// error response instead of a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration error");
            std::process::exit(1);
        }
    };

    let store = match MemoryStore::connect(&config.store_url) {
        Ok(store) => Arc::new(store),
        Err(error) => {
            tracing::error!(%error, url = %config.store_url, "failed to open store");
            std::process::exit(1);
        }
    };
    tracing::info!(url = %config.store_url, "store opened");

    // The browser front end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let application = app(AppState::new(store.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors);

    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, addr = %config.bind_addr(), "failed to bind");
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on {addr}"),
        Err(error) => tracing::warn!(%error, "could not determine local address"),
    }

    if let Err(error) = axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "server error");
        std::process::exit(1);
    }

    store.close().await;
    tracing::info!("server shutdown complete");
}

/// Completes when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
