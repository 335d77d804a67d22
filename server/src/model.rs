//! Domain types for the todo collection.
//!
//! # Design
//! The wire-facing request types keep every field optional so that a
//! missing `title` or an out-of-set `status` is reported through the
//! service's own validation (400 with the offending field named) rather
//! than as a serde-level rejection. Validation turns them into [`NewTodo`]
//! and [`TodoPatch`], the only forms the store accepts. Patch fields are
//! presence-marked with `Option` instead of sentinels — an empty
//! `description` is a legitimate value to set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Lifecycle state of a todo. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    /// Parse a wire value. Anything outside the two enumerated values is
    /// rejected by the caller, never coerced.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A single todo document. `id` and `created_at` are assigned by the
/// store at creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Materialize a new document from validated input. New todos always
    /// start pending.
    pub fn new(input: NewTodo) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TodoStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update. Only fields present in the patch change.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Creation payload as received. `status` is not accepted here; unknown
/// fields in the body are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Trim both fields and check the title, yielding store-ready input.
    /// The description defaults to an empty string.
    pub fn validate(self) -> Result<NewTodo, ApiError> {
        let title = self.title.as_deref().unwrap_or("").trim().to_string();
        if title.is_empty() {
            return Err(ApiError::TitleRequired);
        }
        let description = self
            .description
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string();
        Ok(NewTodo { title, description })
    }
}

/// Update payload as received. `status` stays a raw string until
/// validation so an unknown value maps to the service's 400 instead of a
/// body-deserialization rejection. A JSON `null` counts as absent.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl UpdateTodoRequest {
    pub fn validate(self) -> Result<TodoPatch, ApiError> {
        let title = match self.title {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(ApiError::TitleRequired);
                }
                Some(trimmed)
            }
            None => None,
        };
        let description = self.description.map(|d| d.trim().to_string());
        let status = match self.status {
            Some(raw) => Some(TodoStatus::parse(&raw).ok_or(ApiError::InvalidStatus)?),
            None => None,
        };
        Ok(TodoPatch {
            title,
            description,
            status,
        })
    }
}

/// Validated creation input.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// Partial update with presence markers; absent fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_timestamp() {
        let todo = Todo::new(NewTodo {
            title: "Test".to_string(),
            description: String::new(),
        });
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["title"], "Test");
        assert_eq!(json["description"], "");
        assert_eq!(json["status"], "pending");
        assert!(json["createdAt"].is_string());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn status_parses_only_enumerated_values() {
        assert_eq!(TodoStatus::parse("pending"), Some(TodoStatus::Pending));
        assert_eq!(TodoStatus::parse("completed"), Some(TodoStatus::Completed));
        assert_eq!(TodoStatus::parse("done"), None);
        assert_eq!(TodoStatus::parse("Pending"), None);
        assert_eq!(TodoStatus::parse(""), None);
    }

    #[test]
    fn create_validation_trims_and_defaults() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"  Buy milk  ","description":"  2%  "}"#).unwrap();
        let input = request.validate().unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, "2%");

        let request: CreateTodoRequest = serde_json::from_str(r#"{"title":"Plain"}"#).unwrap();
        let input = request.validate().unwrap();
        assert_eq!(input.description, "");
    }

    #[test]
    fn create_validation_rejects_missing_or_blank_title() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"description":"no title"}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::TitleRequired)
        ));

        let request: CreateTodoRequest = serde_json::from_str(r#"{"title":"   "}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::TitleRequired)
        ));
    }

    #[test]
    fn update_validation_keeps_absent_fields_absent() {
        let request: UpdateTodoRequest = serde_json::from_str(r#"{}"#).unwrap();
        let patch = request.validate().unwrap();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.status.is_none());
    }

    #[test]
    fn update_validation_treats_null_as_absent() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"description":null}"#).unwrap();
        let patch = request.validate().unwrap();
        assert!(patch.description.is_none());
    }

    #[test]
    fn update_validation_allows_empty_description() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"description":"   "}"#).unwrap();
        let patch = request.validate().unwrap();
        assert_eq!(patch.description.as_deref(), Some(""));
    }

    #[test]
    fn update_validation_rejects_blank_title() {
        let request: UpdateTodoRequest = serde_json::from_str(r#"{"title":"  "}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::TitleRequired)
        ));
    }

    #[test]
    fn update_validation_rejects_out_of_set_status() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ApiError::InvalidStatus)
        ));
    }

    #[test]
    fn apply_changes_only_present_fields() {
        let mut todo = Todo::new(NewTodo {
            title: "Walk dog".to_string(),
            description: "around the block".to_string(),
        });
        todo.apply(TodoPatch {
            status: Some(TodoStatus::Completed),
            ..TodoPatch::default()
        });
        assert_eq!(todo.title, "Walk dog");
        assert_eq!(todo.description, "around the block");
        assert_eq!(todo.status, TodoStatus::Completed);

        todo.apply(TodoPatch {
            title: Some("Walk cat".to_string()),
            ..TodoPatch::default()
        });
        assert_eq!(todo.title, "Walk cat");
        assert_eq!(todo.status, TodoStatus::Completed);
    }
}
