//! HTTP request handlers.

/// Liveness probe.
pub mod health;
/// Image-related endpoints.
pub mod image;
/// Paste-related endpoints.
pub mod paste;

use crate::{error::HttpError, AppState};
use axum::http::HeaderMap;

pub(crate) fn require_read(state: &AppState, headers: &HeaderMap) -> Result<(), HttpError> {
    if state.access.may_read(headers) {
        Ok(())
    } else {
        tracing::warn!("Rejected unauthenticated read");
        Err(HttpError::unauthorized())
    }
}

pub(crate) fn require_write(state: &AppState, headers: &HeaderMap) -> Result<(), HttpError> {
    if state.access.may_write(headers) {
        Ok(())
    } else {
        tracing::warn!("Rejected unauthenticated write");
        Err(HttpError::unauthorized())
    }
}
