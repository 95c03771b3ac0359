//! In-memory stand-in for the todo backend.
//!
//! Serves the `/api/todos/` contract: sequential integer ids, newest id last
//! in listings, 400 on a blank title, 404 on unknown ids.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Default)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    last_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/todos/", get(list_todos).post(create_todo))
        .route("/api/todos/{id}/", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." })))
}

fn blank_title() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "title": ["This field may not be blank."] })),
    )
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    if input.title.trim().is_empty() {
        return Err(blank_title());
    }
    let mut store = db.write().await;
    store.last_id += 1;
    let todo = Todo {
        id: store.last_id,
        title: input.title,
        completed: input.completed,
    };
    store.todos.insert(todo.id, todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> ApiResult<Json<Todo>> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or_else(not_found)?;
    if let Some(title) = input.title {
        if title.trim().is_empty() {
            return Err(blank_title());
        }
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_numeric_id() {
        let todo = Todo {
            id: 7,
            title: "Buy milk".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, json!({ "id": 7, "title": "Buy milk", "completed": false }));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(input.title.is_none());
        assert_eq!(input.completed, Some(true));
    }
}
