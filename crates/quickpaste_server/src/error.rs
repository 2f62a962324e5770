//! HTTP error mapping for API handlers.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quickpaste_core::AppError;
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Build an error with an explicit status and client-facing message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Rejection for callers the access policy does not admit.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Auth required.")
    }

    /// Map [`AppError::NotFound`] to a route-specific message, anything else as usual.
    pub fn not_found_as(message: &'static str) -> impl FnOnce(AppError) -> Self {
        move |err| match err {
            AppError::NotFound => Self::new(StatusCode::NOT_FOUND, message),
            other => other.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidContent => Self::new(StatusCode::BAD_REQUEST, "Content is required."),
            AppError::InvalidOption(option) => {
                tracing::debug!("Rejected expiration option {:?}", option);
                Self::new(StatusCode::BAD_REQUEST, "Invalid expiration option.")
            }
            AppError::InvalidPayload(detail) => {
                tracing::debug!("Rejected image payload: {}", detail);
                Self::new(StatusCode::BAD_REQUEST, "Invalid image data.")
            }
            AppError::TooLarge { limit } => Self::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Image too large (limit {} bytes).", limit),
            ),
            AppError::NotFound => Self::new(StatusCode::NOT_FOUND, "Not found."),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large.");
        }
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body.")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
