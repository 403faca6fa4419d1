use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ::http::StatusCode;

use crate::{
    application::todo_service::TodoService,
    domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo},
    http::types::ApiError,
};

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>).delete(delete_all_todos::<S>))
        .route("/todos/:id", get(get_todo::<S>).patch(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, payload: Result<Json<CreateTodo>, JsonRejection>) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload.map_err(invalid_body)?;
    Ok(Json(state.service.create(input).await?))
}

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// A missing todo answers 204 with an empty body.
async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    Ok(match state.service.get(id).await? {
        Some(todo) => Json(todo).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, payload: Result<Json<UpdateTodo>, JsonRejection>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload.map_err(invalid_body)?;
    state.service.update(id, input).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.service.delete(id).await? { Ok(StatusCode::OK) } else { Err(ApiError::NotFound) }
}

async fn delete_all_todos<S: TodoService>(State(state): State<AppState<S>>) -> Result<StatusCode, ApiError> {
    state.service.delete_all().await?;
    Ok(StatusCode::OK)
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> { s.parse().map_err(|_| ApiError::InvalidInput("invalid id".into())) }

fn invalid_body(rejection: JsonRejection) -> ApiError { ApiError::InvalidInput(rejection.body_text()) }
