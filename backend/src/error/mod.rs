use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

mod store;

pub use store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    BadRequest(String),
    Validation(Vec<String>),
    InvalidTransition(String),
    UpstreamUnavailable(String),
    Upstream(String),
    PartialFailure {
        completed: &'static str,
        failed: &'static str,
        message: String,
    },
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND", None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED", None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                "VALIDATION_ERROR",
                Some(serde_json::json!({ "errors": errors })),
            ),
            AppError::InvalidTransition(msg) => {
                (StatusCode::CONFLICT, msg, "INVALID_TRANSITION", None)
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::warn!(error = %msg, "spreadsheet unavailable");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "The spreadsheet service did not respond".to_string(),
                    "UPSTREAM_UNAVAILABLE",
                    None,
                )
            }
            AppError::Upstream(msg) => {
                tracing::warn!(error = %msg, "spreadsheet returned an error");
                (
                    StatusCode::BAD_GATEWAY,
                    "The spreadsheet service returned an error".to_string(),
                    "UPSTREAM_ERROR",
                    None,
                )
            }
            AppError::PartialFailure {
                completed,
                failed,
                message,
            } => {
                tracing::error!(completed, failed, error = %message, "partial update");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("{} was updated but {} was not", completed, failed),
                    "PARTIAL_FAILURE",
                    Some(serde_json::json!({ "completed": completed, "failed": failed })),
                )
            }
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: code.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Network { .. } => AppError::UpstreamUnavailable(err.to_string()),
            StoreError::Upstream { .. } => AppError::Upstream(err.to_string()),
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Validation(errors) => AppError::Validation(errors),
            StoreError::InvalidTransition(msg) => AppError::InvalidTransition(msg),
            StoreError::PartialFailure {
                completed,
                failed,
                message,
            } => AppError::PartialFailure {
                completed,
                failed,
                message,
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(crate::validation::messages(&errors))
    }
}
