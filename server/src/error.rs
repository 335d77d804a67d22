//! Error taxonomy for the HTTP surface.
//!
//! # Design
//! [`ApiError`] is the only place internal failures turn into status
//! codes. Every error body has the shape `{"error": "<message>"}`, with
//! one consistent wording per condition. A store failure other than a
//! missing document is logged in full here and reported to the client as
//! a generic 500 — the detail never leaves the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Title missing or empty after trimming, on create or update.
    #[error("Title is required")]
    TitleRequired,

    /// The path id is not a well-formed identifier.
    #[error("Invalid todo ID")]
    InvalidId,

    /// Status outside the enumerated set.
    #[error("Invalid status. Must be \"pending\" or \"completed\"")]
    InvalidStatus,

    /// Well-formed id with no matching document.
    #[error("Todo not found")]
    NotFound,

    /// The store failed for a reason other than a missing document. The
    /// `Display` message is what the client sees; the source carries the
    /// detail for the log.
    #[error("Internal server error")]
    Store(#[source] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::TitleRequired | Self::InvalidId | Self::InvalidStatus => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(ref error) = self {
            tracing::error!(%error, "store operation failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}
