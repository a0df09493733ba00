// src/poller/mod.rs

//! Poll loop: fetch → validate → format → notify → sleep.

pub mod status;
pub mod validate;

use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::services::{Notifier, PracticumClient, SendOutcome, StatusSource, TelegramBot};

pub use status::parse_status;
pub use validate::check_response;

/// Mutable state owned by the poll loop.
#[derive(Debug, Clone, Default)]
pub struct PollState {
    /// Timestamp cursor marking the point after which new status
    /// changes are fetched
    since: i64,

    /// Text of the previous cycle's error, kept for deduplication
    last_error: Option<String>,
}

impl PollState {
    pub fn new(since: i64) -> Self {
        Self {
            since,
            last_error: None,
        }
    }

    pub fn since(&self) -> i64 {
        self.since
    }

    /// Advance the cursor. It never moves backwards; an absent current
    /// date leaves it unchanged.
    fn advance(&mut self, current_date: Option<i64>) {
        if let Some(ts) = current_date {
            self.since = self.since.max(ts);
        }
    }

    /// True when the message differs from the previous cycle's error.
    fn should_alert(&self, message: &str) -> bool {
        self.last_error.as_deref() != Some(message)
    }

    fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    fn clear_error(&mut self) {
        self.last_error = None;
    }
}

/// What a completed cycle produced.
struct CycleReport {
    current_date: Option<i64>,
    delivery: Option<SendOutcome>,
}

/// Fetch, validate and (when there is something to report) notify.
fn run_cycle(
    source: &dyn StatusSource,
    notifier: &dyn Notifier,
    since: i64,
) -> Result<CycleReport> {
    let response = source.fetch_statuses(since)?;
    let homework = validate::check_response(&response)?;

    let delivery = match homework {
        Some(entry) => {
            let message = status::parse_status(&entry)?;
            log::info!("status change detected: {message}");
            Some(notifier.send(&message))
        }
        None => {
            log::debug!("no new homework statuses");
            None
        }
    };

    Ok(CycleReport {
        current_date: response.get("current_date").and_then(Value::as_i64),
        delivery,
    })
}

/// Run one poll cycle and update the state.
///
/// The cursor advances iff the API call and validation succeeded; a
/// failed delivery is logged but does not hold it back. An error
/// notification is sent only when its text differs from the previous
/// cycle's error, so sustained failures alert once.
pub fn poll_once(source: &dyn StatusSource, notifier: &dyn Notifier, state: &mut PollState) {
    match run_cycle(source, notifier, state.since) {
        Ok(report) => {
            if report.delivery == Some(SendOutcome::Failed) {
                log::warn!("cycle completed but the notification was not delivered");
            }
            state.clear_error();
            state.advance(report.current_date);
        }
        Err(error) => {
            let message = format!("Сбой в работе программы: {error}");
            log::error!("{message}");
            if state.should_alert(&message) {
                notifier.send(&message);
            }
            state.record_error(message);
        }
    }
}

/// Run the poll loop until process termination, or for a single cycle
/// when `once` is set.
pub fn run(config: &Config, once: bool) -> Result<()> {
    let client = PracticumClient::new(&config.endpoint, &config.practicum_token)?;
    let bot = TelegramBot::new(&config.telegram_token, &config.telegram_chat_id)?;
    let mut state = PollState::new(Utc::now().timestamp() - config.lookback_secs);

    log::info!(
        "polling {} every {}s, starting from {}",
        config.endpoint,
        config.poll_interval_secs,
        state.since()
    );

    loop {
        poll_once(&client, &bot, &mut state);
        if once {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(config.poll_interval_secs));
    }
}
