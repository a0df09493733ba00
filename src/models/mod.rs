//! Data definitions shared across the bot.

pub mod verdict;
