use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ProviderError(_) => "PROVIDER_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProviderError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidRequest(msg) => AppError::ValidationError(msg),
            GenerationError::InvalidMode(_) => AppError::ValidationError(err.to_string()),
            GenerationError::Provider(msg) => AppError::ProviderError(msg),
            GenerationError::Normalization(failure) => AppError::InternalError(failure.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of the generation pipeline. Returned as values, never logged here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid mode '{0}': expected 'student-first' or 'teacher-first'")]
    InvalidMode(String),

    #[error("Completion provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Normalization(#[from] NormalizationFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationErrorKind {
    ParseError,
    UnexpectedShape,
}

impl NormalizationErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            NormalizationErrorKind::ParseError => "Failed to parse model output as JSON",
            NormalizationErrorKind::UnexpectedShape => "Unexpected format",
        }
    }
}

/// Model output that could not be turned into an artifact. Keeps the
/// untouched completion text so callers can show or log it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", kind.message())]
pub struct NormalizationFailure {
    pub kind: NormalizationErrorKind,
    pub raw_output: String,
}

impl NormalizationFailure {
    pub fn new(kind: NormalizationErrorKind, raw_output: impl Into<String>) -> Self {
        Self {
            kind,
            raw_output: raw_output.into(),
        }
    }
}
