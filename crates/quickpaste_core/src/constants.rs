//! Shared constants used across quickpaste crates.

/// Default API port for quickpaste.
pub const DEFAULT_PORT: u16 = 3850;

/// Default upper bound for an encoded image data URL, in bytes.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Default request body limit enforced by the HTTP layer.
///
/// Must stay above [`DEFAULT_MAX_IMAGE_BYTES`] so oversized images reach the
/// store and are reported as too large rather than cut off by the transport.
pub const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Default period between background sweeps of expired pastes.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Number of characters the classifier inspects.
pub const CLASSIFY_PREFIX_CHARS: usize = 1000;

/// Length of generated entry identifiers, in hex characters.
pub const ID_LEN: usize = 10;

/// Language tag used when nothing matches or a manual tag is rejected.
pub const NO_LANGUAGE: &str = "none";

/// Media type assumed when an image payload does not declare one.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
