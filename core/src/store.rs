//! Session state for a todo UI, reconciled from API responses.
//!
//! # Design
//! `SessionStore` owns the list a front end renders, plus the loading flag,
//! the surfaced error message, and the at-most-one editing selection. Like
//! the rest of the core it never touches the network: each user intent is a
//! `begin_*` method returning an `HttpRequest`, and the host feeds the
//! resulting `HttpResponse` back through the matching `apply_*` method.
//!
//! Reconciliation rules:
//! - the server result is authoritative — created entities are prepended as
//!   returned, updates replace the matching entry in place, the store never
//!   synthesizes ids or timestamps;
//! - a failed operation leaves the list untouched and surfaces one of the
//!   fixed messages below;
//! - every successful application clears the surfaced error.

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Message surfaced when loading the list fails.
pub const LOAD_FAILED: &str = "Failed to fetch todos";
/// Message surfaced when creating a todo fails.
pub const CREATE_FAILED: &str = "Failed to create todo";
/// Message surfaced when updating a todo fails.
pub const UPDATE_FAILED: &str = "Failed to update todo";
/// Message surfaced when deleting a todo fails.
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// Client-side session state plus the request builder it feeds.
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: TodoClient,
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
    editing_id: Option<Uuid>,
}

impl SessionStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            todos: Vec::new(),
            loading: false,
            error: None,
            editing_id: None,
        }
    }

    /// The current list, most recently created first once loaded.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The surfaced error message, if any operation failed since the last
    /// success or dismissal.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The todo currently being edited. Resolved against the live list, so
    /// an entity that has been deleted can never be "being edited".
    pub fn editing(&self) -> Option<&Todo> {
        let id = self.editing_id?;
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn begin_edit(&mut self, id: Uuid) {
        self.editing_id = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Start fetching the list. Marks the store as loading until the
    /// response is applied.
    pub fn begin_load(&mut self) -> HttpRequest {
        self.loading = true;
        self.client.build_list_todos()
    }

    /// Reconcile the list response. On success the whole list is replaced;
    /// on failure the last good list is kept and [`LOAD_FAILED`] surfaced.
    pub fn apply_load(&mut self, response: HttpResponse) {
        self.loading = false;
        match self.client.parse_list_todos(response) {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_FAILED.to_string()),
        }
    }

    /// Build a create request from raw form input. Both fields are trimmed;
    /// an empty title is refused locally without building a request. A blank
    /// description is omitted so the server applies its default.
    pub fn begin_create(&self, title: &str, description: &str) -> Result<HttpRequest, ApiError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::TitleRequired);
        }
        let description = description.trim();
        let input = CreateTodo {
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        };
        self.client.build_create_todo(&input)
    }

    /// Reconcile a create response. The server-returned entity is prepended
    /// as-is; ids and timestamps are never produced locally.
    pub fn apply_create(&mut self, response: HttpResponse) {
        match self.client.parse_create_todo(response) {
            Ok(todo) => {
                self.todos.insert(0, todo);
                self.error = None;
            }
            Err(_) => self.error = Some(CREATE_FAILED.to_string()),
        }
    }

    /// Build an update request carrying only the fields present in `patch`.
    pub fn begin_update(&self, id: Uuid, patch: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.client.build_update_todo(id, patch)
    }

    /// Reconcile an update response. The returned entity replaces the
    /// matching entry in place, keeping its position; if that entry was
    /// being edited the selection is cleared. On failure the selection and
    /// the list are kept so the edit can be retried.
    pub fn apply_update(&mut self, response: HttpResponse) {
        match self.client.parse_update_todo(response) {
            Ok(updated) => {
                if self.editing_id == Some(updated.id) {
                    self.editing_id = None;
                }
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
                self.error = None;
            }
            Err(_) => self.error = Some(UPDATE_FAILED.to_string()),
        }
    }

    pub fn begin_delete(&self, id: Uuid) -> HttpRequest {
        self.client.build_delete_todo(id)
    }

    /// Reconcile a delete response. A 204 carries no body, so the caller
    /// supplies the id of the entity the request targeted.
    pub fn apply_delete(&mut self, id: Uuid, response: HttpResponse) {
        match self.client.parse_delete_todo(response) {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                if self.editing_id == Some(id) {
                    self.editing_id = None;
                }
                self.error = None;
            }
            Err(_) => self.error = Some(DELETE_FAILED.to_string()),
        }
    }

    /// Build an update flipping the entity's completion state, carrying only
    /// `status`. Fails locally if the id is not in the current list.
    pub fn begin_toggle(&self, id: Uuid) -> Result<HttpRequest, ApiError> {
        let todo = self
            .todos
            .iter()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        let patch = UpdateTodo {
            status: Some(todo.status.toggled()),
            ..UpdateTodo::default()
        };
        self.client.build_update_todo(id, &patch)
    }
}
