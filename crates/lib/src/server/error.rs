//! Mapping library errors onto HTTP responses.
//!
//! Every failure leaves the server as `{"error": "<message>"}`. Internal
//! errors are logged in full and replaced by a generic, per-handler message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{Error, ErrorKind};

/// Message sent for every bearer-token failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// An error response: status code plus a caller-safe message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Convert a library error, using `internal_message` in place of internal details.
    pub fn from_error(err: Error, internal_message: &str) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::Conflict => Self::new(StatusCode::CONFLICT, err.to_string()),
            ErrorKind::Authentication => {
                let message = match &err {
                    Error::Auth(auth_err) if auth_err.is_token_error() => {
                        UNAUTHORIZED_MESSAGE.to_string()
                    }
                    _ => err.to_string(),
                };
                Self::new(StatusCode::UNAUTHORIZED, message)
            }
            ErrorKind::Internal => {
                tracing::error!(module = err.module(), "{internal_message}: {err}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, internal_message)
            }
        }
    }

    /// A request body that could not be parsed as the expected JSON.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {rejection}");
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}
