use axum::response::{IntoResponse, Response};
use ::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::repository::RepositoryError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub message: String }

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("no such todo")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // The todos API reports unknown ids on mutation as a client error, not 404.
            ApiError::InvalidInput(_) | ApiError::NotFound => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage fault");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, axum::Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_faults_map_to_500_without_details() {
        let err = ApiError::from(RepositoryError::Storage(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidInput("invalid id".into()).status(), StatusCode::BAD_REQUEST);
    }
}
