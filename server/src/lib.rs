//! REST service persisting todos in a document store.
//!
//! # Overview
//! Four CRUD endpoints over a single `todos` collection plus a health
//! probe. Each request is handled independently; the only state shared
//! across requests is the process-scoped store handle in [`AppState`].
//!
//! # Design
//! - Validation and status-code selection live in [`routes`]; every
//!   failure is an [`error::ApiError`] rendered as `{"error": ...}`.
//! - Persistence goes through the [`store::TodoStore`] trait; the
//!   in-memory engine backs default runs and tests.
//! - [`app`] builds the bare router; the binary wires tracing, CORS and
//!   the request timeout around it.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;

pub use config::Config;
pub use error::ApiError;
pub use model::{CreateTodoRequest, NewTodo, Todo, TodoPatch, TodoStatus, UpdateTodoRequest};
pub use store::{MemoryStore, StoreError, TodoStore};

/// Shared application state: the store handle, created once at startup
/// and closed once at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Build the router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            put(routes::update_todo).delete(routes::delete_todo),
        )
        .with_state(state)
}

/// Serve a memory-backed app on the listener. Embedding hook; the client
/// crate's integration tests run the real server through it.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    axum::serve(listener, app(state)).await
}
