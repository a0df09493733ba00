// src/poller/status.rs

//! Status formatting for homework entries.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::verdict::verdict;

/// Build the notification text for a homework entry.
///
/// Requires `homework_name` and `status` string fields, and a status
/// that belongs to the verdict catalog.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = require_str(homework, "homework_name")?;
    let status = require_str(homework, "status")?;

    let verdict = verdict(status)
        .ok_or_else(|| AppError::missing_key(format!("unknown status \"{status}\"")))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

fn require_str<'a>(homework: &'a Value, key: &str) -> Result<&'a str> {
    let value = homework
        .get(key)
        .ok_or_else(|| AppError::missing_key(key.to_string()))?;
    value
        .as_str()
        .ok_or_else(|| AppError::type_mismatch(format!("{key} is not a string")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_formats_approved_entry() {
        let homework = json!({"homework_name": "hw1", "status": "approved"});
        assert_eq!(
            parse_status(&homework).unwrap(),
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let homework = json!({"homework_name": "hw2", "status": "rejected"});
        let first = parse_status(&homework).unwrap();
        let second = parse_status(&homework).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_missing_name() {
        let homework = json!({"status": "approved"});
        assert!(matches!(
            parse_status(&homework),
            Err(AppError::MissingKey(message)) if message == "homework_name"
        ));
    }

    #[test]
    fn test_rejects_missing_status() {
        let homework = json!({"homework_name": "hw1"});
        assert!(matches!(
            parse_status(&homework),
            Err(AppError::MissingKey(message)) if message == "status"
        ));
    }

    #[test]
    fn test_rejects_unknown_status() {
        let homework = json!({"homework_name": "hw1", "status": "on_hold"});
        assert!(matches!(
            parse_status(&homework),
            Err(AppError::MissingKey(message)) if message.contains("on_hold")
        ));
    }

    #[test]
    fn test_rejects_non_string_status() {
        let homework = json!({"homework_name": "hw1", "status": 3});
        assert!(matches!(parse_status(&homework), Err(AppError::Type(_))));
    }
}
