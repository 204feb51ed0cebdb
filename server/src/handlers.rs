//! Route handlers for the `/todos` resource.
//!
//! Each `/todos` handler takes `ApiKey` first so authentication runs before
//! any path or body parsing.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::{InvalidTodoId, NewTodo, Todo, TodoId, TodoStore};

use crate::auth::ApiKey;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of the unauthenticated liveness route.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub ok: String,
}

/// A segment that does not even decode to text is as invalid as bad hex.
fn parse_id(segment: Result<Path<String>, PathRejection>) -> Result<TodoId, InvalidTodoId> {
    let Path(raw) = segment.map_err(|_| InvalidTodoId)?;
    raw.parse()
}

pub async fn home() -> Json<Health> {
    Json(Health {
        ok: "OK!".to_string(),
    })
}

pub async fn list_todos<S: TodoStore>(
    _key: ApiKey,
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.store.find_all().await?;
    Ok(Json(todos))
}

pub async fn create_todo<S: TodoStore>(
    _key: ApiKey,
    State(state): State<AppState<S>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let input: NewTodo = serde_json::from_slice(&body).map_err(ApiError::InvalidBody)?;
    let todo = input.into_todo(TodoId::new());
    state
        .store
        .insert(todo.clone())
        .await
        .map_err(ApiError::Insert)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo<S: TodoStore>(
    _key: ApiKey,
    State(state): State<AppState<S>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(id)?;
    let todo = state.store.find_by_id(id).await?;
    Ok(Json(todo))
}

pub async fn delete_todo<S: TodoStore>(
    _key: ApiKey,
    State(state): State<AppState<S>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(id)?;
    state.store.delete_by_id(id).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}
