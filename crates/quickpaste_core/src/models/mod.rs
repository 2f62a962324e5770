//! Data models for stored entries and their API shapes.

/// Image entry model and payload inspection.
pub mod image;
/// Paste entry model and request/response shapes.
pub mod paste;


use chrono::{DateTime, Utc};

/// Common view over stored entries used by the store's collections.
pub trait Entry: Clone {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}
