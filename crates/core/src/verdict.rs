//! Homework review verdicts
//!
//! Maps the closed set of review statuses reported by the Practicum API to
//! the notification text sent to the chat.

use crate::error::VerdictError;
use serde_json::Value;

/// Review verdict for a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Parse an API status string; anything outside the closed set is `None`
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Canonical sentence shown to the user for this verdict
    pub const fn sentence(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Render the notification text for a single homework record
///
/// The record must carry a recognized `status` and a non-empty
/// `homework_name`; everything else in the record is ignored.
pub fn render_status_change(record: &Value) -> Result<String, VerdictError> {
    let status = record["status"]
        .as_str()
        .ok_or(VerdictError::MissingField("status"))?;

    let verdict = Verdict::parse(status)
        .ok_or_else(|| VerdictError::UnknownStatus(status.to_string()))?;

    let name = record["homework_name"]
        .as_str()
        .filter(|name| !name.is_empty())
        .ok_or(VerdictError::MissingField("homework_name"))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict.sentence()
    ))
}
