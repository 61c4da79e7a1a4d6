use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type
#[derive(Debug)]
pub enum AppError {
    UnsupportedFormat(String),
    MissingColumn(String),
    EmptyTable,
    NotFound(String),
    TemplateNotFound(String),
    NoQuestionText,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(path) => {
                write!(
                    f,
                    "Unsupported file format '{}'. Only .csv and .xlsx are allowed.",
                    path
                )
            }
            AppError::MissingColumn(name) => write!(f, "Missing required column: '{}'", name),
            AppError::EmptyTable => write!(f, "The question table has no rows"),
            AppError::NotFound(key) => write!(f, "Sub-lesson '{}' not found.", key),
            AppError::TemplateNotFound(template) => {
                write!(f, "Template '{}' not found for this sub-lesson.", template)
            }
            AppError::NoQuestionText => {
                write!(f, "No valid question text found for this sub-lesson.")
            }
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable machine-readable code; callers tell a sub-lesson miss from
    /// a template miss by this, not by parsing the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat(_) => "unsupported_format",
            AppError::MissingColumn(_) => "missing_column",
            AppError::EmptyTable => "empty_table",
            AppError::NotFound(_) => "sub_lesson_not_found",
            AppError::TemplateNotFound(_) => "template_not_found",
            AppError::NoQuestionText => "no_question_text",
            AppError::BadRequest(_) => "bad_request",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, error_message) = match &self {
            AppError::UnsupportedFormat(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::NotFound(_) | AppError::TemplateNotFound(_) | AppError::NoQuestionText => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::MissingColumn(_) | AppError::EmptyTable => {
                tracing::error!("Dataset error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
