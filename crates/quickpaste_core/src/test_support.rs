//! Shared test-only helpers for quickpaste_core.

use crate::clock::ManualClock;
use crate::constants::DEFAULT_MAX_IMAGE_BYTES;
use crate::store::EntryStore;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex, OnceLock};

/// Serializes tests that mutate process environment variables.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Restores an environment variable to its previous state on drop.
///
/// Hold [`env_lock`] for as long as any guard is alive.
pub(crate) struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        let guard = Self::capture(key);
        std::env::set_var(key, value);
        guard
    }

    pub(crate) fn remove(key: &str) -> Self {
        let guard = Self::capture(key);
        std::env::remove_var(key);
        guard
    }

    fn capture(key: &str) -> Self {
        Self {
            key: key.to_string(),
            previous: std::env::var(key).ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.as_deref() {
            Some(previous) => std::env::set_var(&self.key, previous),
            None => std::env::remove_var(&self.key),
        }
    }
}

/// Creates a store driven by a [`ManualClock`] pinned to a fixed instant.
///
/// # Returns
/// The store and the clock controlling it.
pub(crate) fn setup_manual_store() -> (Arc<EntryStore>, Arc<ManualClock>) {
    let start = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("fixed start instant");
    let clock = Arc::new(ManualClock::new(start));
    let store = Arc::new(EntryStore::with_clock(
        DEFAULT_MAX_IMAGE_BYTES,
        clock.clone(),
    ));
    (store, clock)
}
