//! Error kinds surfaced by the HTTP handlers and their single mapping to
//! status codes and the `{success, error, message}` envelope.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest,
    #[error("not found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("unprocessable")]
    Unprocessable,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        tracing::error!("Store operation failed: {error}");
        ApiError::Unprocessable
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> ApiError {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> ApiError {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        ApiError::BadRequest
    }
}

// routes only match integer ids, anything else names a resource that can't exist
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> ApiError {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        ApiError::NotFound
    }
}

/// Listing endpoints report any store failure as a missing resource.
pub trait OrNotFound<T> {
    fn or_not_found(self) -> Result<T, ApiError>;
}

impl<T> OrNotFound<T> for sqlx::Result<T> {
    fn or_not_found(self) -> Result<T, ApiError> {
        self.map_err(|error| {
            tracing::warn!("Listing query failed: {error}");
            ApiError::NotFound
        })
    }
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self) -> Result<T, ApiError> {
        self.ok_or(ApiError::NotFound)
    }
}
