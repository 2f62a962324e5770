//! Identifier uniqueness in the underlying collection.

use super::*;
use crate::models::image::ImageEntry;
use crate::models::paste::PasteEntry;
use crate::store::collection::Collection;
use chrono::{TimeZone, Utc};

fn paste(id: &str, content: &str) -> PasteEntry {
    PasteEntry {
        id: id.to_string(),
        content: content.to_string(),
        language: "none".to_string(),
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid instant"),
        expires_at: None,
        expires_in: ExpirationOption::Never,
    }
}

#[test]
fn duplicate_id_is_internal_error_and_keeps_first_entry() {
    let mut pastes = Collection::default();
    let first = paste("0a1b2c3d4e", "first");
    pastes.insert(first.clone()).expect("first insert");

    let err = pastes
        .insert(paste("0a1b2c3d4e", "second"))
        .expect_err("colliding id must be rejected");
    assert!(matches!(err, AppError::Internal(_)), "got {err:?}");

    assert_eq!(pastes.len(), 1);
    assert_eq!(pastes.get("0a1b2c3d4e"), Some(&first));
    assert_eq!(pastes.newest_first(), vec![first]);
}

#[test]
fn duplicate_image_id_is_rejected_too() {
    let mut images = Collection::default();
    let first = ImageEntry {
        id: "ffffffffff".to_string(),
        data_url: tiny_png(),
        content_type: "image/png".to_string(),
        created_at: Utc::now(),
    };
    images.insert(first.clone()).expect("first insert");

    let mut second = first.clone();
    second.content_type = "image/gif".to_string();
    assert!(matches!(
        images.insert(second),
        Err(AppError::Internal(_))
    ));
    assert_eq!(images.len(), 1);
    assert_eq!(
        images.get("ffffffffff").map(|image| image.content_type.as_str()),
        Some("image/png")
    );
}
