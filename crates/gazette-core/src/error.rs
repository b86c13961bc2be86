//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Gazette.
///
/// Business-rule errors (`NotFound`, `Conflict`, `Forbidden`, `Validation`)
/// are deterministic from input state and always surface to the caller.
/// Infrastructure errors from the cache never do; the service layer recovers
/// them locally.
#[derive(Error, Debug)]
pub enum GazetteError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} {id} does not exist")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error (e.g., duplicate title)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Authentication/Authorization Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("Token expired")]
    TokenExpired,

    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GazetteError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired | Self::InvalidCredentials => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True for infrastructure errors the service layer may recover locally.
    #[must_use]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for GazetteError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // Unique constraint violation (MySQL 1062 / PostgreSQL 23505)
                if let Some(code) = db_err.code() {
                    if code == "1062" || code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GazetteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `GazetteError`.
    #[must_use]
    pub fn from_error(error: &GazetteError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&GazetteError> for ErrorResponse {
    fn from(error: &GazetteError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(GazetteError::not_found("Article", 1).status_code(), 404);
        assert_eq!(GazetteError::validation("bad title").status_code(), 400);
        assert_eq!(GazetteError::conflict("duplicate title").status_code(), 409);
        assert_eq!(GazetteError::unauthorized("no token").status_code(), 401);
        assert_eq!(GazetteError::forbidden("not the author").status_code(), 403);
        assert_eq!(GazetteError::Cache("down".to_string()).status_code(), 500);
        assert_eq!(GazetteError::Database("down".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GazetteError::not_found("Article", 1).error_code(), "NOT_FOUND");
        assert_eq!(GazetteError::conflict("dup").error_code(), "CONFLICT");
        assert_eq!(GazetteError::forbidden("nope").error_code(), "FORBIDDEN");
        assert_eq!(GazetteError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(GazetteError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(GazetteError::Cache("x".to_string()).error_code(), "CACHE_ERROR");
    }

    #[test]
    fn test_not_found_message() {
        let err = GazetteError::not_found("Article", "42");
        assert_eq!(err.to_string(), "Article 42 does not exist");
    }

    #[test]
    fn test_infrastructure_classification() {
        assert!(GazetteError::Cache("redis gone".to_string()).is_infrastructure());
        assert!(GazetteError::Database("pool".to_string()).is_infrastructure());
        assert!(!GazetteError::not_found("Article", 1).is_infrastructure());
        assert!(!GazetteError::forbidden("nope").is_infrastructure());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = GazetteError::not_found("Article", 7);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Article 7 does not exist");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = GazetteError::validation("bad input");
        let details = vec![FieldError {
            field: "title".to_string(),
            message: "Title must be at least 3 characters long".to_string(),
            code: "length".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }
}
