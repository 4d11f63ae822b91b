use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::read_model::{BookingError, ShowRejection};
use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `NOT_FOUND`,
    /// `MISSING_FIELD`, `INVALID_FIELD`, `UNKNOWN_ARTIST`, `UNKNOWN_VENUE`,
    /// `STORE_WRITE_FAILED`, `INTERNAL_ERROR`.
    #[schema(example = "UNKNOWN_VENUE")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "unknown venue: 5")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    ShowRejected(ShowRejection),
    StoreWrite(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::ShowRejected(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: rejection.code(),
                    message: rejection.to_string(),
                },
            ),
            AppError::StoreWrite(detail) => {
                tracing::error!("Store write failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "STORE_WRITE_FAILED",
                        message: "The change could not be saved".into(),
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Write(detail) => AppError::StoreWrite(detail),
            StoreError::Read(detail) => AppError::Internal(detail),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound { .. } => AppError::NotFound(err.to_string()),
            BookingError::Rejected(rejection) => AppError::ShowRejected(rejection),
            BookingError::Store(store) => store.into(),
        }
    }
}
