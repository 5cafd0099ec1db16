//! HTTP route handlers for the gateway.

pub mod analyze;
pub mod predict;

use axum::Json;
use opd_insights_core::ServiceStatus;

use crate::error::AppError;

/// GET / - Liveness check.
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus::running())
}

/// Fallback for paths with no route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
