use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request. Please try again.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Failures of a single relay invocation.
///
/// `Display` carries the full detail and is meant for server logs; the
/// HTTP body only ever exposes the validation message or a generic text.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl RelayError {
    fn public_message(&self) -> &str {
        match self {
            RelayError::Validation(message) => message,
            RelayError::Configuration(_) | RelayError::Provider(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration(_) | RelayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.public_message() }))
    }
}
