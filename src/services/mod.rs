//! External collaborators: the Practicum API and the Telegram Bot API.

pub mod practicum;
pub mod telegram;

pub use practicum::{PracticumClient, StatusSource};
pub use telegram::{Notifier, SendOutcome, TelegramBot};
