//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PORT, DEFAULT_SWEEP_INTERVAL_SECS,
};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration for quickpaste.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub max_image_bytes: usize,
    pub max_body_bytes: usize,
    pub sweep_interval_secs: u64,
    /// Shared secret gating the API; `None` leaves it open.
    pub app_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            app_password: None,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_number<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring unparsable {}='{}'; using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_image_bytes = env_number("MAX_IMAGE_BYTES", defaults.max_image_bytes);
        let mut max_body_bytes = env_number("MAX_BODY_BYTES", defaults.max_body_bytes);
        if max_body_bytes <= max_image_bytes {
            // Leave headroom for the JSON envelope around the data URL.
            let raised = max_image_bytes.saturating_mul(2);
            tracing::warn!(
                "MAX_BODY_BYTES ({}) must exceed MAX_IMAGE_BYTES ({}); raising to {}",
                max_body_bytes,
                max_image_bytes,
                raised
            );
            max_body_bytes = raised;
        }
        let sweep_interval_secs =
            match env_number("SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs) {
                0 => {
                    tracing::warn!("SWEEP_INTERVAL_SECS=0 is not allowed; using default");
                    defaults.sweep_interval_secs
                }
                secs => secs,
            };

        Self {
            port: env_number("PORT", defaults.port),
            max_image_bytes,
            max_body_bytes,
            sweep_interval_secs,
            app_password: env::var("APP_PASSWORD")
                .ok()
                .filter(|value| !value.trim().is_empty()),
        }
    }

    /// Period between background sweeps.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use crate::constants::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_PORT};
    use crate::test_support::{env_lock, EnvGuard};

    const CONFIG_VARS: [&str; 5] = [
        "PORT",
        "MAX_IMAGE_BYTES",
        "MAX_BODY_BYTES",
        "SWEEP_INTERVAL_SECS",
        "APP_PASSWORD",
    ];

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_applies_defaults_when_unset() {
        let _lock = env_lock().lock().expect("env lock");
        let _guards: Vec<EnvGuard> = CONFIG_VARS.iter().map(|key| EnvGuard::remove(key)).collect();

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_image_bytes, DEFAULT_MAX_IMAGE_BYTES);
        assert!(config.max_body_bytes > config.max_image_bytes);
        assert_eq!(config.sweep_interval().as_secs(), 60);
        assert!(config.app_password.is_none());
    }

    #[test]
    fn from_env_reads_overrides_and_rejects_bad_values() {
        let _lock = env_lock().lock().expect("env lock");
        let _guards: Vec<EnvGuard> = CONFIG_VARS.iter().map(|key| EnvGuard::remove(key)).collect();
        let _port = EnvGuard::set("PORT", "4100");
        let _image = EnvGuard::set("MAX_IMAGE_BYTES", "1024");
        let _body = EnvGuard::set("MAX_BODY_BYTES", "512");
        let _sweep = EnvGuard::set("SWEEP_INTERVAL_SECS", "0");
        let _password = EnvGuard::set("APP_PASSWORD", "   ");

        let config = Config::from_env();
        assert_eq!(config.port, 4100);
        assert_eq!(config.max_image_bytes, 1024);
        assert_eq!(config.max_body_bytes, 2048);
        assert_eq!(config.sweep_interval_secs, 60);
        assert!(config.app_password.is_none(), "blank password leaves API open");
    }

    #[test]
    fn from_env_keeps_default_port_for_garbage() {
        let _lock = env_lock().lock().expect("env lock");
        let _guards: Vec<EnvGuard> = CONFIG_VARS.iter().map(|key| EnvGuard::remove(key)).collect();
        let _port = EnvGuard::set("PORT", "not-a-port");
        let _password = EnvGuard::set("APP_PASSWORD", "hunter2");

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.app_password.as_deref(), Some("hunter2"));
    }
}
