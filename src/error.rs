//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure a handler can produce is one of its variants, and each variant maps to a
//! fixed HTTP status code with a JSON body of the form `{"message": "..."}`.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers return
//! `Result<impl Responder, AppError>` and use `?` freely. `From` implementations cover
//! `sqlx::Error`, `validator::ValidationErrors`, `jsonwebtoken::errors::Error`,
//! `bcrypt::BcryptError` and `chrono::ParseError`.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A resource that must be unique already exists (HTTP 400, e.g. duplicate registration).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Bad credentials or a missing/invalid token (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The resource is missing or not owned by the caller (HTTP 404).
    /// Ownership failures use this variant, never a 403.
    #[error("Not Found: {0}")]
    NotFound(String),
    /// The request body or query failed validation (HTTP 422).
    #[error("Validation Error: {0}")]
    ValidationError(String),
    /// An unexpected server-side error (HTTP 500).
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
    /// A storage failure, including failed commits (HTTP 500).
    #[error("Database Error: {0}")]
    DatabaseError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // The public contract reports duplicate registrations as a plain 400.
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) | AppError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Conflict(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::ValidationError(msg) => msg.clone(),
            AppError::InternalServerError(msg) | AppError::DatabaseError(msg) => {
                log::error!("{}", msg);
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound`; every other database error is an internal failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(format!("Invalid token: {}", error))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(error: chrono::ParseError) -> AppError {
        AppError::ValidationError(format!(
            "due_date must use the YYYY-MM-DDTHH:MM format: {}",
            error
        ))
    }
}
