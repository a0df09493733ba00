// src/models/verdict.rs

//! Verdict catalog for homework review statuses.

/// Known review statuses and their human-readable verdicts.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Look up the verdict for a status code.
pub fn verdict(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}
