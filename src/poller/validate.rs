// src/poller/validate.rs

//! Response-shape validation for the homework status endpoint.

use serde_json::Value;

use crate::error::{AppError, Result};

/// Check that an API response matches the documented shape and extract
/// the first homework entry, if any.
///
/// Checks run in order: the response must be a mapping, must contain a
/// `homeworks` field, and that field must be a list. An empty list is a
/// valid response with nothing to report.
pub fn check_response(response: &Value) -> Result<Option<Value>> {
    let mapping = response
        .as_object()
        .ok_or_else(|| AppError::type_mismatch("response is not a mapping"))?;

    let homeworks = mapping
        .get("homeworks")
        .ok_or_else(|| AppError::missing_key("homeworks"))?;

    let list = homeworks
        .as_array()
        .ok_or_else(|| AppError::type_mismatch("homeworks is not a list"))?;

    Ok(list.first().cloned())
}
