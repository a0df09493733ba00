// src/main.rs

//! hwbot: Practicum homework status bot
//!
//! Polls the homework review API on a fixed interval and relays status
//! changes to a Telegram chat. Secrets come from the environment (or an
//! optional `.env` file); tunables can be overridden on the command line.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use hwbot::config::Config;
use hwbot::{logging, poller};

#[derive(Parser, Debug)]
#[command(
    name = "hwbot",
    version = "1.0.0",
    about = "Practicum homework status bot"
)]

/// CLI Arguments
struct Cli {
    /// Poll interval in seconds
    #[arg(long)]
    interval: Option<u64>,

    /// Homework status endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "debug")]
    log_level: String,

    /// Log file path (truncated on startup)
    #[arg(long, default_value = "homework.log")]
    log_file: PathBuf,
}

/// Main entry point
fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging::init(&cli.log_file, &cli.log_level);

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("startup aborted: {error}");
            process::exit(1);
        }
    };

    if let Some(interval) = cli.interval {
        config.poll_interval_secs = interval;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    if let Err(error) = poller::run(&config, cli.once) {
        log::error!("startup aborted: {error}");
        process::exit(1);
    }
}
