//! Error handling for the endpoint hitter
//!
//! This module defines all error types used throughout the crate.

use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// Result type alias for the endpoint hitter
pub type Result<T> = std::result::Result<T, HitterError>;

/// Main error type for the endpoint hitter
#[derive(Error, Debug)]
pub enum HitterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (input file reading, socket binding)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A transaction returned a non-successful response code
    #[error("request returned a non-successful response code: {0}")]
    Status(reqwest::StatusCode),

    /// Malformed upload payloads
    #[error("Upload error: {0}")]
    Upload(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl HitterError {
    /// Configuration error from any message
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Upload error from any message
    pub fn upload<S: Into<String>>(message: S) -> Self {
        Self::Upload(message.into())
    }

    /// Internal error from any message
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl actix_web::ResponseError for HitterError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = match self {
            HitterError::Upload(_) => (actix_web::http::StatusCode::BAD_REQUEST, "UPLOAD_ERROR"),
            HitterError::Config(_) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            HitterError::Io(_) => (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            HitterError::HttpClient(_) | HitterError::Status(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
            ),
            HitterError::Internal(_) => {
                (actix_web::http::StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }))
    }
}
