//! Synchronous client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `SessionStore` layers UI session state on top: the rendered list, the
//!   loading flag, the surfaced error message, and the editing selection,
//!   reconciled from responses via `begin_*`/`apply_*` pairs.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::SessionStore;
pub use types::{CreateTodo, Todo, TodoStatus, UpdateTodo};
