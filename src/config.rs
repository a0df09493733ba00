// src/config.rs

//! Configuration constants and environment loading.

use std::env;

use crate::error::{AppError, Result};

/// Homework status endpoint of the Practicum API.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Seconds between poll cycles.
pub const POLL_INTERVAL_SECS: u64 = 600;

/// How far back the initial "since" cursor reaches, in seconds.
pub const LOOKBACK_SECS: i64 = 5000;

/// HTTP request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Required environment variables, checked at startup.
const REQUIRED_VARS: &[&str] = &["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Immutable runtime configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat identifier
    pub telegram_chat_id: String,

    /// Homework status endpoint URL
    pub endpoint: String,

    /// Seconds between poll cycles
    pub poll_interval_secs: u64,

    /// Initial lookback for the "since" cursor, in seconds
    pub lookback_secs: i64,
}

impl Config {
    /// Build configuration from process environment variables.
    ///
    /// Fails if any of `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` or
    /// `TELEGRAM_CHAT_ID` is absent or blank; the error names every
    /// missing variable at once.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut values = Vec::with_capacity(REQUIRED_VARS.len());
        let mut missing = Vec::new();

        for name in REQUIRED_VARS {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => values.push(value),
                _ => missing.push(*name),
            }
        }

        if !missing.is_empty() {
            return Err(AppError::config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let mut values = values.into_iter();
        Ok(Self {
            practicum_token: values.next().unwrap_or_default(),
            telegram_token: values.next().unwrap_or_default(),
            telegram_chat_id: values.next().unwrap_or_default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval_secs: POLL_INTERVAL_SECS,
            lookback_secs: LOOKBACK_SECS,
        })
    }
}
