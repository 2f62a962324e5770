//! Entry store tests.

use super::*;
use crate::clock::ManualClock;
use crate::constants::DEFAULT_MAX_IMAGE_BYTES;
use crate::error::AppError;
use crate::expiry::ExpirationOption;
use crate::test_support::setup_manual_store;
use chrono::Duration;
use std::collections::HashSet;

mod collection_ops;
mod image_ops;

fn one_ms() -> Duration {
    Duration::milliseconds(1)
}

fn tiny_png() -> String {
    "data:image/png;base64,iVBORw0KGgo=".to_string()
}
