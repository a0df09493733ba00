// src/services/telegram.rs

//! Telegram notifier.
//!
//! Sends text messages to the configured chat via the Bot API. Delivery
//! failures are logged and reported through [`SendOutcome`], never
//! propagated: a broken notification channel must not stop the poll loop.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, Result};

/// Base URL of the Telegram Bot API.
const API_BASE: &str = "https://api.telegram.org";

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    Failed,
}

impl SendOutcome {
    pub fn is_delivered(self) -> bool {
        self == Self::Delivered
    }
}

/// Message sink used by the poll loop.
pub trait Notifier {
    /// Send a text message to the configured destination.
    fn send(&self, text: &str) -> SendOutcome;
}

/// Response envelope of the Bot API.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API client bound to a single chat.
pub struct TelegramBot {
    client: Client,
    url: String,
    chat_id: String,
}

impl TelegramBot {
    /// Create a bot for the given token and destination chat.
    pub fn new(token: &str, chat_id: &str) -> Result<Self> {
        Self::with_base(API_BASE, token, chat_id)
    }

    /// Create a bot against a custom API base URL.
    pub fn with_base(base: &str, token: &str, chat_id: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::delivery(e.to_string()))?;

        Ok(Self {
            client,
            url: format!("{base}/bot{token}/sendMessage"),
            chat_id: chat_id.to_string(),
        })
    }

    fn try_send(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .map_err(|e| AppError::delivery(e.to_string()))?;

        let envelope: ApiEnvelope = response
            .json()
            .map_err(|e| AppError::delivery(e.to_string()))?;

        if !envelope.ok {
            return Err(AppError::delivery(
                envelope
                    .description
                    .unwrap_or_else(|| "Bot API reported ok=false".to_string()),
            ));
        }
        Ok(())
    }
}

impl Notifier for TelegramBot {
    fn send(&self, text: &str) -> SendOutcome {
        match self.try_send(text) {
            Ok(()) => {
                log::debug!("message delivered to chat {}: {}", self.chat_id, text);
                SendOutcome::Delivered
            }
            Err(error) => {
                log::error!("message not delivered: {error}");
                SendOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_outcome() {
        assert!(SendOutcome::Delivered.is_delivered());
        assert!(!SendOutcome::Failed.is_delivered());
    }

    #[test]
    fn test_url_embeds_token() {
        let bot = TelegramBot::with_base("http://localhost:1", "abc:123", "42").unwrap();
        assert_eq!(bot.url, "http://localhost:1/botabc:123/sendMessage");
    }
}
