//! Error types for the Homebase server

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared_types::DomainError;
use thiserror::Error;
use tracing::{error, warn};

use crate::render::fragments;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Corrupt reference data: {0}")]
    CorruptReferenceData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::CorruptReferenceData(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CORRUPT_REFERENCE_DATA")
            }
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(code, "{}", message);
        } else {
            warn!(code, "{}", message);
        }

        (status, Html(fragments::error_alert(code, &message))).into_response()
    }
}

impl From<DomainError> for ServerError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            DomainError::InvalidInput(msg) => ServerError::InvalidRequest(msg),
            DomainError::DivisionUndefined(msg) => ServerError::CorruptReferenceData(msg),
            DomainError::DuplicateKey { .. } => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<FormRejection> for ServerError {
    fn from(rejection: FormRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}
