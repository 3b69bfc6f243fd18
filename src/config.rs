//! Store configuration parsed from environment variables.
//!
//! Optional:
//! - `REALTIME_MAX_DATA_POINTS`: per-channel buffer bound, default 1000, must be > 0
//! - `REALTIME_AUTO_RECONNECT`: `true`/`false`, default `true`
//! - `REALTIME_RECONNECT_INTERVAL_MS`: default 5000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::NonZeroUsize;

pub const DEFAULT_MAX_DATA_POINTS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(999);
pub const DEFAULT_AUTO_RECONNECT: bool = true;
pub const DEFAULT_RECONNECT_INTERVAL_MS: u64 = 5000;

const MAX_DATA_POINTS_VAR: &str = "REALTIME_MAX_DATA_POINTS";
const AUTO_RECONNECT_VAR: &str = "REALTIME_AUTO_RECONNECT";
const RECONNECT_INTERVAL_VAR: &str = "REALTIME_RECONNECT_INTERVAL_MS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCount { var: &'static str, value: String },
    #[error("{var} must be 'true' or 'false', got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
    #[error("{var} must be a millisecond count, got '{value}'")]
    InvalidInterval { var: &'static str, value: String },
}

/// Initial values for the realtime store. [`crate::RealtimeStore::reset`]
/// returns to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub default_max_data_points: NonZeroUsize,
    pub auto_reconnect: bool,
    pub reconnect_interval_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_max_data_points: DEFAULT_MAX_DATA_POINTS,
            auto_reconnect: DEFAULT_AUTO_RECONNECT,
            reconnect_interval_ms: DEFAULT_RECONNECT_INTERVAL_MS,
        }
    }
}

impl StoreConfig {
    /// Build config from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Absent keys use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first key whose value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(MAX_DATA_POINTS_VAR) {
            cfg.default_max_data_points = raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidCount { var: MAX_DATA_POINTS_VAR, value: raw.clone() })?;
        }
        if let Some(raw) = lookup(AUTO_RECONNECT_VAR) {
            cfg.auto_reconnect = parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidFlag { var: AUTO_RECONNECT_VAR, value: raw.clone() })?;
        }
        if let Some(raw) = lookup(RECONNECT_INTERVAL_VAR) {
            cfg.reconnect_interval_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidInterval { var: RECONNECT_INTERVAL_VAR, value: raw.clone() })?;
        }

        Ok(cfg)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
