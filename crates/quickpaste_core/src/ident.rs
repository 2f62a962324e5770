//! Short opaque identifiers for stored entries.

use crate::constants::ID_LEN;
use rand::RngCore;

/// Generate a new entry identifier.
///
/// Draws `ID_LEN / 2` bytes from the thread-local CSPRNG (seeded from the OS)
/// and renders them as lowercase hex. An unavailable entropy source panics
/// inside `rand`; there is no recoverable error path.
///
/// # Returns
/// A 10-character lowercase hex string.
pub fn new_id() -> String {
    let mut bytes = [0u8; ID_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
