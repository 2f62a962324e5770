//! Pluggable access gate consulted by handlers before touching the store.

use axum::http::{header, HeaderMap};
use quickpaste_core::Config;
use std::sync::Arc;

/// Decides whether a request may read or mutate entries.
pub trait AccessPolicy: Send + Sync {
    fn may_read(&self, headers: &HeaderMap) -> bool;
    fn may_write(&self, headers: &HeaderMap) -> bool;
}

/// Admits every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAccess;

impl AccessPolicy for OpenAccess {
    fn may_read(&self, _headers: &HeaderMap) -> bool {
        true
    }

    fn may_write(&self, _headers: &HeaderMap) -> bool {
        true
    }
}

/// Admits requests carrying `Authorization: Bearer <secret>`.
pub struct SharedSecretAccess {
    secret: String,
}

impl SharedSecretAccess {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn presents_secret(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .is_some_and(|token| constant_time_eq(token.trim().as_bytes(), self.secret.as_bytes()))
    }
}

impl AccessPolicy for SharedSecretAccess {
    fn may_read(&self, headers: &HeaderMap) -> bool {
        self.presents_secret(headers)
    }

    fn may_write(&self, headers: &HeaderMap) -> bool {
        self.presents_secret(headers)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Choose the access policy for a configuration.
///
/// # Returns
/// [`SharedSecretAccess`] when `APP_PASSWORD` is configured, else [`OpenAccess`].
pub fn policy_for(config: &Config) -> Arc<dyn AccessPolicy> {
    match config.app_password.as_deref() {
        Some(secret) => Arc::new(SharedSecretAccess::new(secret)),
        None => Arc::new(OpenAccess),
    }
}
