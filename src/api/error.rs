//! Mapping of manager errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::core::{ErrorKind, ManagerError};

/// Error body returned by every route: `{"detail": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        let status = match (err.kind(), &err) {
            (ErrorKind::NotFound, _) => StatusCode::NOT_FOUND,
            (ErrorKind::PreconditionViolated, ManagerError::NotRunning(_)) => {
                StatusCode::BAD_REQUEST
            }
            (ErrorKind::PreconditionViolated, _) => StatusCode::NOT_FOUND,
            (ErrorKind::ResourceUnavailable, ManagerError::TemplateMissing(_)) => {
                StatusCode::NOT_FOUND
            }
            (ErrorKind::ResourceUnavailable, _) => StatusCode::SERVICE_UNAVAILABLE,
            (ErrorKind::OperationFailed, _) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Include the OS cause so the caller can act on it
        let detail = match std::error::Error::source(&err) {
            Some(source) => format!("{}: {}", err, source),
            None => err.to_string(),
        };

        if status.is_server_error() {
            error!("{}", detail);
        }

        Self { status, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
