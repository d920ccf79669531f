//! Error types for the publisher demo server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::Record;

/// Main application error type
///
/// Every variant is answered with a plain-text body holding the message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Path parameter is not an integer
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Request body is not a JSON document of the expected shape
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn invalid_id<T: Record>() -> Self {
        AppError::InvalidIdentifier(format!("Invalid {} ID", T::NAME))
    }

    pub fn malformed_body() -> Self {
        AppError::MalformedBody("Invalid request payload".to_string())
    }

    pub fn not_found<T: Record>() -> Self {
        AppError::NotFound(format!("{} not found", T::DISPLAY_NAME))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
