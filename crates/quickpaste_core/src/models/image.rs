//! Image entry model and data-URL payload inspection.

use super::Entry;
use crate::constants::FALLBACK_CONTENT_TYPE;
use crate::error::AppError;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// An immutable stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub id: String,
    pub data_url: String,
    pub content_type: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Entry for ImageEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Request payload for uploading an image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageRequest {
    #[serde(default)]
    pub data_url: String,
}

/// Validate a data-URL payload and extract its declared media type.
///
/// Checks run cheapest first: scheme, size bound, header shape, then the
/// base64 body (only when the header declares base64).
///
/// # Arguments
/// - `data_url`: Full `data:<type>[;base64],<body>` string.
/// - `max_bytes`: Upper bound on the encoded length.
///
/// # Returns
/// The declared media type of a base64 payload, or
/// `application/octet-stream` when none is declared.
///
/// # Errors
/// [`AppError::InvalidPayload`] for malformed payloads and
/// [`AppError::TooLarge`] when `data_url` exceeds `max_bytes`.
pub fn inspect_data_url(data_url: &str, max_bytes: usize) -> Result<String, AppError> {
    let Some(rest) = data_url.strip_prefix(DATA_URL_SCHEME) else {
        return Err(AppError::InvalidPayload(
            "expected a data: URL".to_string(),
        ));
    };
    if data_url.len() > max_bytes {
        return Err(AppError::TooLarge { limit: max_bytes });
    }
    let Some((header, body)) = rest.split_once(',') else {
        return Err(AppError::InvalidPayload(
            "data URL has no payload separator".to_string(),
        ));
    };
    if body.is_empty() {
        return Err(AppError::InvalidPayload("data URL payload is empty".to_string()));
    }

    let Some(media) = header.strip_suffix(BASE64_MARKER) else {
        return Ok(FALLBACK_CONTENT_TYPE.to_string());
    };
    general_purpose::STANDARD
        .decode(body)
        .map_err(|err| AppError::InvalidPayload(format!("payload is not valid base64: {err}")))?;

    let media_type = media.split(';').next().unwrap_or_default().trim();
    if media_type.is_empty() {
        Ok(FALLBACK_CONTENT_TYPE.to_string())
    } else {
        Ok(media_type.to_string())
    }
}
