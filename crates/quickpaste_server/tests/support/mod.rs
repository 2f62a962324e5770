//! Shared integration-test server bootstrap helpers.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use quickpaste_server::{create_app, AppState, Config, EntryStore, ManualClock};
use std::sync::Arc;

pub(crate) const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

pub(crate) struct TestApp {
    pub server: TestServer,
    pub store: Arc<EntryStore>,
    pub clock: Arc<ManualClock>,
}

pub(crate) fn test_config() -> Config {
    Config {
        port: 0,
        ..Config::default()
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestApp {
    let start = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid start instant");
    let clock = Arc::new(ManualClock::new(start));
    let store = Arc::new(EntryStore::with_clock(config.max_image_bytes, clock.clone()));
    let state = AppState::new(config, store.clone());
    let app = create_app(state, false);
    let server = TestServer::new(app).expect("server");
    TestApp {
        server,
        store,
        clock,
    }
}

pub(crate) fn setup_test_server() -> TestApp {
    test_server_for_config(test_config())
}
