use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::filter::CriteriaError;
use crate::repository::RepositoryError;
use crate::utils::response::error as error_response;
use crate::validation::LocalizedFieldError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Form has {} invalid field(s)", .0.len())]
    FieldErrors(Vec<LocalizedFieldError>),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Payment required: {0}")]
    PaymentRequired(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FieldErrors(_) => "INVALID_FIELDS",
            AppError::AuthError(_) => "AUTH_ERROR",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::PaymentRequired(_) => "PAYMENT_REQUIRED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::FieldErrors(fields) => {
                warn!(fields = fields.len(), "Form rejected");
            }
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::Forbidden(msg)
            | AppError::PaymentRequired(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => {
                warn!(code = self.code(), message = %msg, "Request rejected");
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => AppError::NotFound(what),
            RepositoryError::Conflict(msg) => AppError::Conflict(msg),
            RepositoryError::LockPoisoned => {
                AppError::InternalServerError("store lock poisoned".to_string())
            }
        }
    }
}

impl From<CriteriaError> for AppError {
    fn from(err: CriteriaError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Internal details stay in the log
        let (public_message, details) = match self {
            AppError::FieldErrors(fields) => {
                let message = format!("{} field(s) need attention", fields.len());
                (message, serde_json::to_value(fields).ok())
            }
            AppError::InternalServerError(_) => {
                ("An internal error occurred".to_string(), None::<Value>)
            }
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::Forbidden(msg)
            | AppError::PaymentRequired(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => (msg, None),
        };

        error_response(code, public_message, details, status)
    }
}

pub type AppResult<T> = Result<T, AppError>;
