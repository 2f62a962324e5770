//! Image collection: create, list and delete. Images never expire.

use super::collection::Collection;
use super::lock_collection;
use crate::clock::Clock;
use crate::error::AppError;
use crate::ident::new_id;
use crate::models::image::{inspect_data_url, ImageEntry};
use std::sync::{Arc, Mutex, MutexGuard};

/// Accessor for stored images.
pub struct ImageStore {
    clock: Arc<dyn Clock>,
    max_bytes: usize,
    entries: Mutex<Collection<ImageEntry>>,
}

impl ImageStore {
    pub(super) fn new(clock: Arc<dyn Clock>, max_bytes: usize) -> Self {
        Self {
            clock,
            max_bytes,
            entries: Mutex::new(Collection::default()),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, Collection<ImageEntry>>, AppError> {
        lock_collection(&self.entries, "image")
    }

    /// Upper bound on encoded payload size, in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Store a new image from a data URL.
    ///
    /// # Errors
    /// [`AppError::InvalidPayload`] when `data_url` is not a well-formed data
    /// URL, [`AppError::TooLarge`] when it exceeds [`ImageStore::max_bytes`].
    /// Rejected payloads are never stored.
    pub fn create(&self, data_url: String) -> Result<ImageEntry, AppError> {
        let content_type = inspect_data_url(&data_url, self.max_bytes)?;
        let entry = ImageEntry {
            id: new_id(),
            data_url,
            content_type,
            created_at: self.clock.now(),
        };
        self.state()?.insert(entry.clone())?;
        tracing::debug!(
            id = %entry.id,
            content_type = %entry.content_type,
            bytes = entry.data_url.len(),
            "Stored image"
        );
        Ok(entry)
    }

    /// List stored images, newest first.
    pub fn list(&self) -> Result<Vec<ImageEntry>, AppError> {
        Ok(self.state()?.newest_first())
    }

    /// Delete an image by id.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when nothing is stored under `id`.
    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        self.state()?.remove(id).ok_or(AppError::NotFound)?;
        tracing::debug!(id, "Deleted image");
        Ok(())
    }

    /// Number of stored images.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.state()?.len())
    }

    /// Whether no images are stored.
    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}
