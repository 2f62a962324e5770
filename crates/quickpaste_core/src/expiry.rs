//! Expiration options and expiry checks for paste entries.

use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolic time-to-live a paste is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpirationOption {
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    OneWeek,
    #[serde(rename = "never")]
    Never,
}

impl ExpirationOption {
    /// Every option in menu order.
    pub const ALL: [ExpirationOption; 5] = [
        Self::TenMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::OneWeek,
        Self::Never,
    ];

    /// The wire symbol for this option.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TenMinutes => "10m",
            Self::OneHour => "1h",
            Self::OneDay => "24h",
            Self::OneWeek => "7d",
            Self::Never => "never",
        }
    }

    /// Fixed lifetime of the option; `None` for [`ExpirationOption::Never`].
    pub fn ttl(self) -> Option<Duration> {
        match self {
            Self::TenMinutes => Some(Duration::minutes(10)),
            Self::OneHour => Some(Duration::hours(1)),
            Self::OneDay => Some(Duration::hours(24)),
            Self::OneWeek => Some(Duration::days(7)),
            Self::Never => None,
        }
    }

    /// Absolute expiry for an entry created at `created_at`.
    ///
    /// # Returns
    /// `Some(created_at + ttl)` for timed options, `None` for `never`.
    pub fn expires_at(self, created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.ttl().map(|ttl| created_at + ttl)
    }
}

impl fmt::Display for ExpirationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpirationOption {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == value)
            .ok_or_else(|| AppError::InvalidOption(value.to_string()))
    }
}

/// Resolve a caller-supplied expiration symbol into an option and expiry.
///
/// # Arguments
/// - `symbol`: One of `10m`, `1h`, `24h`, `7d`, `never`. Missing is invalid.
/// - `created_at`: Creation instant of the entry.
///
/// # Returns
/// The parsed option and its absolute expiry (`None` for `never`).
///
/// # Errors
/// Returns [`AppError::InvalidOption`] for anything outside the enumeration.
pub fn resolve(
    symbol: Option<&str>,
    created_at: DateTime<Utc>,
) -> Result<(ExpirationOption, Option<DateTime<Utc>>), AppError> {
    let option: ExpirationOption = symbol.unwrap_or_default().parse()?;
    Ok((option, option.expires_at(created_at)))
}

/// Whether an entry with the given expiry is expired at `now`.
///
/// Entries without an expiry never expire; otherwise expiry requires `now` to be
/// strictly after the expiry instant.
pub fn is_expired(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    expires_at.is_some_and(|expires_at| now > expires_at)
}
