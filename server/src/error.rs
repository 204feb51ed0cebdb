//! Error → HTTP response mapping.
//!
//! Every failure a handler can hit becomes an `ApiError`, rendered as
//! `{"error": "<message>"}` with the status from `ApiError::status_code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::{InvalidTodoId, StoreError};
use tracing::{debug, error};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or wrong `X-API-KEY` header.
    #[error("invalid API key")]
    InvalidApiKey,

    /// The create payload is not valid JSON of the expected shape.
    #[error("failed to read todo from request {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The `{id}` path segment is not an object id.
    #[error("Not an Object ID")]
    InvalidId(#[from] InvalidTodoId),

    #[error("failed to insert todo {0}")]
    Insert(#[source] StoreError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            // A malformed id is a client mistake, but existing clients see 500.
            ApiError::InvalidId(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Insert(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %message, "request failed");
        } else {
            debug!(%status, error = %message, "request rejected");
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
