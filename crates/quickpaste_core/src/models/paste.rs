//! Paste entry model and request/response payloads.

use super::Entry;
use crate::expiry::ExpirationOption;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable stored paste.
///
/// `expires_at` is `None` exactly when `expires_in` is
/// [`ExpirationOption::Never`]; otherwise it is `created_at` plus the option's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteEntry {
    pub id: String,
    pub content: String,
    pub language: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_in: ExpirationOption,
}

impl Entry for PasteEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PasteEntry {
    /// Human-facing share path for this paste.
    pub fn link(&self) -> String {
        paste_link(&self.id)
    }
}

/// Share path for a paste id (`/p/{id}`).
pub fn paste_link(id: &str) -> String {
    format!("/p/{id}")
}

/// Request payload for creating a paste.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePasteRequest {
    #[serde(default)]
    pub content: String,
    pub expires_in: Option<String>,
    /// Explicit tag, or `auto`/absent to classify.
    pub language: Option<String>,
}

/// Response body for a newly created paste.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPaste {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_in: ExpirationOption,
    pub language: String,
    pub link: String,
}

impl From<&PasteEntry> for CreatedPaste {
    fn from(entry: &PasteEntry) -> Self {
        Self {
            id: entry.id.clone(),
            expires_at: entry.expires_at,
            expires_in: entry.expires_in,
            language: entry.language.clone(),
            link: entry.link(),
        }
    }
}

/// List row: the full entry plus its share link.
#[derive(Debug, Clone, Serialize)]
pub struct PasteListItem {
    #[serde(flatten)]
    pub entry: PasteEntry,
    pub link: String,
}

impl From<PasteEntry> for PasteListItem {
    fn from(entry: PasteEntry) -> Self {
        let link = entry.link();
        Self { entry, link }
    }
}
