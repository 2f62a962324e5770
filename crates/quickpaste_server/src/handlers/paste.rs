//! Paste HTTP handlers.

use super::{require_read, require_write};
use crate::{error::HttpError, models::paste::*, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

const PASTE_GONE: &str = "Paste not found or expired.";
const PASTE_MISSING: &str = "Paste not found.";

/// Create a paste.
///
/// # Returns
/// `201 Created` with the new id, expiry and resolved language.
///
/// # Errors
/// Returns 400 for blank content, an unknown expiry option, or a malformed body.
pub async fn create_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePasteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedPaste>), HttpError> {
    require_write(&state, &headers)?;
    let Json(req) = payload?;

    let entry = state.store.pastes.create(
        req.content,
        req.expires_in.as_deref(),
        req.language.as_deref(),
    )?;
    tracing::info!(
        "Created paste {} (language={}, expires_in={})",
        entry.id,
        entry.language,
        entry.expires_in
    );
    Ok((StatusCode::CREATED, Json(CreatedPaste::from(&entry))))
}

/// List live pastes, newest first.
pub async fn list_pastes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<PasteListItem>>, HttpError> {
    require_read(&state, &headers)?;
    let pastes = state.store.pastes.list()?;
    Ok(Json(pastes.into_iter().map(PasteListItem::from).collect()))
}

/// Fetch a single paste.
///
/// # Errors
/// Returns 404 when the paste is unknown or has expired.
pub async fn get_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<PasteEntry>, HttpError> {
    require_read(&state, &headers)?;
    state
        .store
        .pastes
        .get(&id)
        .map(Json)
        .map_err(HttpError::not_found_as(PASTE_GONE))
}

pub async fn delete_paste(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    require_write(&state, &headers)?;
    state
        .store
        .pastes
        .delete(&id)
        .map_err(HttpError::not_found_as(PASTE_MISSING))?;
    tracing::info!("Deleted paste {}", id);
    Ok(Json(json!({ "ok": true })))
}
