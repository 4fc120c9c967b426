//! Error types for txboard-core
//!
//! Only transport failures exist when talking to the transactions backend:
//! the request did not complete, the backend answered with a non-success
//! status, or the body could not be decoded. There is no domain-level
//! rejection.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Connection or send failure
    RequestFailed,
    /// Backend answered with a non-success status
    BadStatus,
    /// Response body did not match the expected shape
    DecodeFailed,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::RequestFailed => write!(f, "REQUEST_FAILED"),
            ErrorCode::BadStatus => write!(f, "BAD_STATUS"),
            ErrorCode::DecodeFailed => write!(f, "DECODE_FAILED"),
        }
    }
}

/// Detailed error information for diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Failure talking to the transactions backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Backend returned {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ClientError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Request { .. } => ErrorCode::RequestFailed,
            ClientError::Status { .. } => ErrorCode::BadStatus,
            ClientError::Decode { .. } => ErrorCode::DecodeFailed,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Status { status, .. } if *status == 404 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status the backend answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            ClientError::Request { url, .. } => {
                details = details.with_suggestion(format!(
                    "Check that the transactions backend is reachable at {}.", url
                ));
                details = details.with_suggestion(
                    "Set backend.base_url in the config file if it runs elsewhere.".to_string()
                );
            }
            ClientError::Status { status, .. } if *status >= 500 => {
                details = details.with_suggestion(
                    "The backend failed internally; check its logs.".to_string()
                );
            }
            ClientError::Decode { .. } => {
                details = details.with_suggestion(
                    "The backend may be a different version than expected.".to_string()
                );
            }
            _ => {}
        }

        details
    }
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    /// Log an error
    fn log_error(&self, error: &ClientError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &ClientError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Warning => log::warn!(
                target: "txboard::error",
                "WARNING [{}] {} - Operation: {}",
                error.code(),
                error,
                context.operation
            ),
            ErrorSeverity::Error => log::error!(
                target: "txboard::error",
                "ERROR [{}] {} - Operation: {}",
                error.code(),
                error.to_details(),
                context.operation
            ),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ClientError {
        ClientError::Status {
            url: "http://localhost:8888/transactions".to_string(),
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::RequestFailed.to_string(), "REQUEST_FAILED");
        assert_eq!(ErrorCode::BadStatus.to_string(), "BAD_STATUS");
        assert_eq!(ErrorCode::DecodeFailed.to_string(), "DECODE_FAILED");
    }

    #[test]
    fn test_client_error_code_and_status() {
        let error = status_error(500);
        assert_eq!(error.code(), ErrorCode::BadStatus);
        assert_eq!(error.status(), Some(500));

        let error = ClientError::Request {
            url: "http://x".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::RequestFailed);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_not_found_is_only_a_warning() {
        assert_eq!(status_error(404).severity(), ErrorSeverity::Warning);
        assert_eq!(status_error(503).severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_request_details_mention_url() {
        let error = ClientError::Request {
            url: "http://localhost:8888/transactions".to_string(),
            message: "connection refused".to_string(),
        };
        let details = error.to_details();
        assert_eq!(details.code, ErrorCode::RequestFailed);
        assert!(details.suggestions[0].contains("http://localhost:8888/transactions"));
        assert!(details.to_string().starts_with("[REQUEST_FAILED]"));
    }
}
