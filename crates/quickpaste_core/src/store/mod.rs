//! In-memory entry store: paste and image collections plus expiry sweeping.
//!
//! Each collection sits behind its own mutex; every read, insert, delete and
//! sweep on a collection serializes on that lock. Entries are independent, so
//! nothing ever holds both locks at once.

mod collection;
/// Image collection operations.
pub mod image;
/// Paste collection operations.
pub mod paste;
/// Background removal of expired pastes.
pub mod sweep;

#[cfg(test)]
mod tests;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::AppError;
use std::sync::{Arc, Mutex, MutexGuard};

pub use image::ImageStore;
pub use paste::PasteStore;
pub use sweep::{spawn_sweeper, SweeperHandle};

/// Owner of every stored entry.
pub struct EntryStore {
    pub pastes: PasteStore,
    pub images: ImageStore,
}

impl EntryStore {
    /// Create an empty store on the system clock.
    ///
    /// # Arguments
    /// - `max_image_bytes`: Upper bound for encoded image payloads.
    pub fn new(max_image_bytes: usize) -> Self {
        Self::with_clock(max_image_bytes, Arc::new(SystemClock))
    }

    /// Create an empty store reading time from `clock`.
    pub fn with_clock(max_image_bytes: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            pastes: PasteStore::new(clock.clone()),
            images: ImageStore::new(clock, max_image_bytes),
        }
    }

    /// Create an empty store sized from runtime configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_image_bytes)
    }
}

fn lock_collection<'a, T>(
    mutex: &'a Mutex<T>,
    kind: &'static str,
) -> Result<MutexGuard<'a, T>, AppError> {
    mutex.lock().map_err(|_| {
        tracing::error!("{} collection lock is poisoned", kind);
        AppError::Internal(format!("{kind} store is unavailable"))
    })
}
