//! Error types for txboard-api

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use txboard_core::{ClientError, ErrorSeverity};
use txboard_utils::escape_html;

/// Error codes for HTTP-facing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NotFound,
    BadRequest,
    UpstreamFailed,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Backend unavailable: {0}")]
    Upstream(#[from] ClientError),
}

impl ApiError {
    pub fn code(&self) -> ApiErrorCode {
        match self {
            ApiError::NotFound { .. } => ApiErrorCode::NotFound,
            ApiError::BadRequest { .. } => ApiErrorCode::BadRequest,
            ApiError::Upstream(_) => ApiErrorCode::UpstreamFailed,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ApiError::Upstream(e) => e.severity(),
            _ => ErrorSeverity::Warning,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let fragment = format!(
            "<div class='alert alert-danger'>{}</div>",
            escape_html(&self.to_string())
        );
        (self.status(), Html(fragment)).into_response()
    }
}
