//! Error types for the library server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application error type
///
/// Every failure a handler can produce is one of these variants and is
/// rendered once, by [`IntoResponse`], into an [`ErrorResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    CreationFailed(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::CreationFailed(_)
            | AppError::BadRequest(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Translate a failed write: integrity violations become `CreationFailed`.
    pub fn from_write(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db)
                if db.is_foreign_key_violation()
                    || db.is_unique_violation()
                    || db.is_check_violation() =>
            {
                AppError::CreationFailed(db.message().to_string())
            }
            other => AppError::Database(other),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Epoch milliseconds at which the failure was rendered
    pub timestamp: i64,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let timestamp = chrono::Utc::now().timestamp_millis();
        let message = self.to_string();

        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}, {}", e, timestamp),
            _ => tracing::error!("{}, {}", message, timestamp),
        }

        (status, Json(ErrorResponse { message, timestamp })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
