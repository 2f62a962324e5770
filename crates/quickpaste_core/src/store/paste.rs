//! Paste collection: create, list, lookup, delete and expiry sweeps.

use super::collection::Collection;
use super::lock_collection;
use crate::clock::Clock;
use crate::detection::resolve_language;
use crate::error::AppError;
use crate::expiry::{self, is_expired};
use crate::ident::new_id;
use crate::models::paste::PasteEntry;
use std::sync::{Arc, Mutex, MutexGuard};

/// Whitespace-only content, counting the byte-order mark as whitespace.
fn is_blank(content: &str) -> bool {
    content
        .chars()
        .all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// Accessor for stored pastes.
pub struct PasteStore {
    clock: Arc<dyn Clock>,
    entries: Mutex<Collection<PasteEntry>>,
}

impl PasteStore {
    pub(super) fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: Mutex::new(Collection::default()),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, Collection<PasteEntry>>, AppError> {
        lock_collection(&self.entries, "paste")
    }

    /// Store a new paste.
    ///
    /// # Arguments
    /// - `content`: Paste body; must contain non-whitespace text.
    /// - `expires_in`: Expiration symbol (`10m`, `1h`, `24h`, `7d`, `never`).
    /// - `language`: Explicit tag, or `None`/`auto` to classify the content.
    ///
    /// # Returns
    /// The stored entry.
    ///
    /// # Errors
    /// [`AppError::InvalidContent`] for blank content,
    /// [`AppError::InvalidOption`] for an unknown expiration symbol.
    pub fn create(
        &self,
        content: String,
        expires_in: Option<&str>,
        language: Option<&str>,
    ) -> Result<PasteEntry, AppError> {
        if is_blank(&content) {
            return Err(AppError::InvalidContent);
        }
        let created_at = self.clock.now();
        let (expires_in, expires_at) = expiry::resolve(expires_in, created_at)?;
        let language = resolve_language(language, &content);

        let entry = PasteEntry {
            id: new_id(),
            content,
            language,
            created_at,
            expires_at,
            expires_in,
        };
        self.state()?.insert(entry.clone())?;
        tracing::debug!(
            id = %entry.id,
            language = %entry.language,
            expires_in = %entry.expires_in,
            "Stored paste"
        );
        Ok(entry)
    }

    /// List live pastes, newest first.
    ///
    /// Expired entries are swept out in the same critical section, so the
    /// result never contains an entry that is expired at call time.
    pub fn list(&self) -> Result<Vec<PasteEntry>, AppError> {
        let now = self.clock.now();
        let mut entries = self.state()?;
        let removed = entries.retain(|entry| !is_expired(entry.expires_at, now));
        if removed > 0 {
            tracing::debug!(removed, "Dropped expired pastes while listing");
        }
        Ok(entries.newest_first())
    }

    /// Fetch a live paste by id.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when the id is unknown or the paste has expired;
    /// an expired paste is removed before reporting.
    pub fn get(&self, id: &str) -> Result<PasteEntry, AppError> {
        let now = self.clock.now();
        let mut entries = self.state()?;
        let entry = entries.get(id).ok_or(AppError::NotFound)?;
        if is_expired(entry.expires_at, now) {
            entries.remove(id);
            tracing::debug!(id, "Removed expired paste on read");
            return Err(AppError::NotFound);
        }
        Ok(entry.clone())
    }

    /// Delete a paste by id, expired or not.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when nothing is stored under `id`.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        self.state()?.remove(id).ok_or(AppError::NotFound)?;
        tracing::debug!(id, "Deleted paste");
        Ok(())
    }

    /// Remove every paste whose expiry has passed.
    ///
    /// # Returns
    /// Number of pastes removed.
    pub fn sweep_expired(&self) -> Result<usize, AppError> {
        let now = self.clock.now();
        Ok(self
            .state()?
            .retain(|entry| !is_expired(entry.expires_at, now)))
    }

    /// Number of stored pastes, including expired ones not yet swept.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.state()?.len())
    }

    /// Whether no pastes are stored.
    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}
