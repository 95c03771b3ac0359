//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. The item id is
//! opaque: whatever the server assigned is carried back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a todo item.
///
/// Backends hand out either integers or strings, so both are accepted and
/// serialized back in their original JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        TodoId::Number(value)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        TodoId::Text(value.to_string())
    }
}

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update payload. Only the fields present are sent; omitted fields
/// remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn completion(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}
