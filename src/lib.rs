// src/lib.rs

//! hwbot: Practicum homework status bot library

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod poller;
pub mod services;
