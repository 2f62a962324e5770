//! Image HTTP handlers.

use super::{require_read, require_write};
use crate::{error::HttpError, models::image::*, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};

const IMAGE_MISSING: &str = "Image not found.";

/// Store an image submitted as a data URL.
///
/// # Errors
/// Returns 400 for a malformed payload and 413 when it exceeds the image bound.
pub async fn create_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateImageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ImageEntry>), HttpError> {
    require_write(&state, &headers)?;
    let Json(req) = payload?;

    let entry = state.store.images.create(req.data_url)?;
    tracing::info!(
        "Stored image {} ({}, {} bytes)",
        entry.id,
        entry.content_type,
        entry.data_url.len()
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_images(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ImageEntry>>, HttpError> {
    require_read(&state, &headers)?;
    Ok(Json(state.store.images.list()?))
}

pub async fn delete_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    require_write(&state, &headers)?;
    state
        .store
        .images
        .delete(&id)
        .map_err(HttpError::not_found_as(IMAGE_MISSING))?;
    tracing::info!("Deleted image {}", id);
    Ok(Json(json!({ "ok": true })))
}
