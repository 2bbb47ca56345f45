//! # ApiError
//!
//! HTTP face of [`AppError`]. Every failure is rendered as
//! `{ "statusCode", "message", "error" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fb_core::error::AppError;
use serde::Serialize;

#[derive(Debug)]
pub struct ApiError(pub AppError);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::ValidationError(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.0 {
            AppError::ValidationError(msg) => msg,
            AppError::Internal(detail) => {
                // Details stay in the logs.
                tracing::error!(error = %detail, "request failed");
                "Internal server error".to_string()
            }
            not_found => not_found.to_string(),
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error").to_string(),
        };
        (status, Json(body)).into_response()
    }
}
