pub mod todos;

use axum::{routing::get, Router};

use crate::application::todo_service::TodoService;

/// Full application router: `/health` plus the todos API.
pub fn app<S: TodoService + Clone>(service: S) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(todos::router(todos::AppState { service }))
}
