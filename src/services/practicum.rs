// src/services/practicum.rs

//! Practicum API client.
//!
//! Fetches homework status updates newer than a given timestamp.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, Result};

/// Source of homework status updates.
///
/// The poll loop depends on this seam rather than on the concrete
/// client, so cycles can be driven by a stub in tests.
pub trait StatusSource {
    /// Fetch all status changes recorded after `from_date`.
    fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// Client for the homework status endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client for the given endpoint and OAuth token.
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

impl StatusSource for PracticumClient {
    /// Perform `GET <endpoint>?from_date=<ts>` and decode the JSON body.
    ///
    /// Failure modes, in order: connect failure, other transport
    /// failure, non-200 status, undecodable body. The decoded value is
    /// returned unvalidated; shape checks belong to the poller.
    fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AppError::Connection(e.to_string())
                } else {
                    AppError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| AppError::Request(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| AppError::Parse(e.to_string()))
    }
}
