//! Image lifecycle tests.

use super::*;

#[test]
fn create_list_delete_image() {
    let (store, clock) = setup_manual_store();
    let first = store.images.create(tiny_png()).expect("create");
    clock.advance(Duration::seconds(1));
    let second = store
        .images
        .create("data:image/jpeg;base64,/9j/4AAQ".to_string())
        .expect("create");

    assert_eq!(first.content_type, "image/png");
    assert_eq!(second.content_type, "image/jpeg");
    assert_eq!(
        store.images.list().expect("list"),
        vec![second.clone(), first.clone()]
    );

    store.images.delete(&first.id).expect("delete");
    assert_eq!(store.images.list().expect("list"), vec![second]);
    assert_eq!(store.images.delete(&first.id), Err(AppError::NotFound));
}

#[test]
fn oversized_image_is_rejected_and_not_stored() {
    let (store, _clock) = setup_manual_store();
    let existing = store.images.create(tiny_png()).expect("create");

    let three_mib = format!("data:image/png;base64,{}", "A".repeat(3 * 1024 * 1024));
    let err = store.images.create(three_mib).expect_err("too large");
    assert_eq!(
        err,
        AppError::TooLarge {
            limit: DEFAULT_MAX_IMAGE_BYTES
        }
    );
    assert_eq!(store.images.list().expect("list"), vec![existing]);
}

#[test]
fn malformed_image_is_rejected_and_not_stored() {
    let (store, _clock) = setup_manual_store();
    for payload in ["", "not a data url", "data:image/png;base64,@@@@"] {
        let err = store
            .images
            .create(payload.to_string())
            .expect_err("invalid payload");
        assert!(matches!(err, AppError::InvalidPayload(_)), "payload: {payload:?}");
    }
    assert!(store.images.is_empty().expect("is_empty"));
}

#[test]
fn images_never_expire() {
    let (store, clock) = setup_manual_store();
    let image = store.images.create(tiny_png()).expect("create");
    clock.advance(Duration::days(365));
    store.pastes.sweep_expired().expect("sweep");
    assert_eq!(store.images.list().expect("list"), vec![image]);
}

#[test]
fn custom_image_limit_is_enforced() {
    let clock = std::sync::Arc::new(ManualClock::starting_now());
    let store = EntryStore::with_clock(64, clock);
    assert_eq!(store.images.max_bytes(), 64);
    let payload = format!("data:image/png;base64,{}", "A".repeat(64));
    assert_eq!(
        store.images.create(payload),
        Err(AppError::TooLarge { limit: 64 })
    );
}

#[test]
fn deleting_unknown_image_fails_without_side_effect() {
    let (store, _clock) = setup_manual_store();
    let image = store.images.create(tiny_png()).expect("create");
    assert_eq!(store.images.delete("ffffffffff"), Err(AppError::NotFound));
    assert_eq!(store.images.list().expect("list"), vec![image]);
}
