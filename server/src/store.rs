//! Persistence seam for the todo collection.
//!
//! # Design
//! The document-store driver is an external collaborator hidden behind
//! [`TodoStore`]; the handlers only ever see this trait. The in-memory
//! engine ships with the crate for default runs and tests: documents
//! keyed by id with the whole map behind one `RwLock`. Write
//! serialization per document is the engine's job — the handlers add no
//! coordination of their own. The handle is created once at startup from
//! the configured connection string and closed after the serve loop
//! returns.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{NewTodo, Todo, TodoPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the requested id.
    #[error("todo not found")]
    NotFound,

    /// The connection string names an engine this build does not provide.
    #[error("unsupported store URL: {0}")]
    UnsupportedUrl(String),

    /// The store could not serve the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Interface the service consumes. Implement it to back the collection
/// with a real document store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All documents, most recently created first.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Persist a new document; the store assigns id and creation time.
    async fn create(&self, input: NewTodo) -> Result<Todo, StoreError>;

    /// Apply a partial update and return the updated document.
    async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, StoreError>;

    /// Remove a document permanently. There is no soft delete.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Release the handle. Called once at shutdown.
    async fn close(&self);
}

/// In-memory document engine.
#[derive(Debug)]
pub struct MemoryStore {
    todos: RwLock<HashMap<Uuid, Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
        }
    }

    /// Open the engine named by a connection string. Only `memory:` URLs
    /// are served here; anything else belongs to an external driver.
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        if url == "memory:" || url.starts_with("memory://") {
            Ok(Self::new())
        } else {
            Err(StoreError::UnsupportedUrl(url.to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        let mut all: Vec<Todo> = todos.values().cloned().collect();
        // Id as tie-break keeps the order deterministic for equal
        // timestamps; map iteration order is not.
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo::new(input);
        self.todos.write().await.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        todo.apply(patch);
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        todos.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn close(&self) {
        tracing::debug!("memory store closed");
    }
}
