use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::error::FlashcardError;

pub const INVALID_ID_MESSAGE: &str = "Invalid flashcard ID";
pub const NOT_FOUND_MESSAGE: &str = "Flashcard not found";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", INVALID_ID_MESSAGE)]
    InvalidId,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Malformed payload")]
    MalformedPayload(String),

    /// Store failures. `message` names the failed operation, `detail` is the
    /// underlying error rendered as a string.
    #[error("{message}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    /// Maps a command error, using `failure` as the message for store failures.
    pub fn from_flashcard(err: FlashcardError, failure: &'static str) -> Self {
        if err.is_persistence() {
            error!(error = %err, "{failure}");
        }
        match err {
            FlashcardError::Validation(v) => AppError::Validation(v.to_string()),
            FlashcardError::InvalidId(_) => AppError::InvalidId,
            FlashcardError::NotFound(_) => AppError::NotFound,
            other => AppError::Internal {
                message: failure,
                detail: other.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId | AppError::MalformedPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::MalformedPayload(detail) => Some(detail.clone()),
            AppError::Internal { detail, .. } => Some(detail.clone()),
            _ => None,
        };
        let body = ErrorBody {
            message: self.to_string(),
            error,
        };

        (status, Json(body)).into_response()
    }
}
