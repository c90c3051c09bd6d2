//! Application error type and its HTTP representation.
//!
//! The wire contract predates this implementation and is deliberately kept:
//! validation and lookup failures are JSON error bodies served with HTTP
//! 200, not 4xx statuses. Only datastore failures on the write path are
//! reported as a real server error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error payload: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Candidate URL failed the syntax or DNS existence check.
    #[error("invalid url")]
    InvalidUrl,

    /// No stored record matches the requested short code.
    #[error("No short URL found for the given input")]
    NotFound,

    /// Insert hit the unique index on `links.code`. The service layer
    /// retries with a fresh code; this variant never reaches a client.
    #[error("short code already in use")]
    CodeConflict,

    /// Datastore connectivity or query failure.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::CodeConflict;
        }

        AppError::Database(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUrl | AppError::NotFound => (StatusCode::OK, self.to_string()),
            AppError::CodeConflict | AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
