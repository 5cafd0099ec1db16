//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Requests that never reach a handler. The body carries a `detail` field so
/// clients see the same shape for every rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    NotFound,
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            AppError::NotFound => "Not Found",
            AppError::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse { detail: self.detail() })).into_response()
    }
}
