//! Client core for a todo list backed by a REST API.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoListController`
//! sits on top and keeps a local copy of the list in sync with the server:
//! the host executes each request it issues and reports the outcome back.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection URL.
//! - The controller owns all mutable state and never propagates errors; each
//!   failure becomes a user-facing `ErrorKind` plus a `tracing` event.
//! - `Transport` is the only I/O seam. The core ships no implementation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod messages;
pub mod types;
pub mod view;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use controller::{Operation, OperationFailure, PendingOp, TodoListController, TodoListState};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use messages::{ErrorKind, Locale, UnknownLocale};
pub use types::{CreateTodo, TodoId, TodoItem, UpdateTodo};
pub use view::{render, ListView};
