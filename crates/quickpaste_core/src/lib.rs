//! Core domain library for quickpaste (config, ephemeral store, classifier).

/// Wall-clock abstraction used for expiry decisions.
pub mod clock;
/// Configuration loading and defaults.
pub mod config;
/// Shared defaults used across quickpaste crates.
pub mod constants;
/// Language detection for unlabeled paste content.
pub mod detection;
/// Application error types (validation/store).
pub mod error;
/// Expiration options and expiry checks.
pub mod expiry;
/// Short opaque entry identifiers.
pub mod ident;
/// Data models for API requests and stored entries.
pub mod models;
/// In-memory entry store and background sweeper.
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use constants::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PORT, DEFAULT_SWEEP_INTERVAL_SECS};
pub use error::AppError;
pub use expiry::ExpirationOption;
pub use store::{spawn_sweeper, EntryStore, SweeperHandle};
