//! HTTP surface of the todo collection.
//!
//! Handlers validate input, call the store, and pick status codes. Every
//! failure path goes through [`ApiError`], the sole translator into
//! `{"error": ...}` bodies. The path id is extracted as a raw string and
//! parsed explicitly so a malformed identifier stays a 400 in the same
//! taxonomy instead of a framework rejection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::AppState;

/// GET /todos, most recently created first.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

/// POST /todos. The stored entity comes back with its server-assigned
/// id and timestamp.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = body.validate()?;
    let todo = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}. Partial update; absent fields are left untouched.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let patch = body.validate()?;
    let todo = state.store.update(id, patch).await?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}. Permanent removal, empty 204 on success.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
    })
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}
