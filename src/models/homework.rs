//! Homework models decoded from the Practicum status API.

use serde_json::Value;
use std::str::FromStr;

use crate::error::{BotError, BotResult};

// =============================================================================
// Homework Status Enum
// =============================================================================

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "reviewed, reviewer satisfied",
            HomeworkStatus::Reviewing => "taken up for review",
            HomeworkStatus::Rejected => "reviewed, reviewer has comments",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

// =============================================================================
// Homework Record
// =============================================================================

/// One submission as reported by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Decodes a raw record, failing closed on missing or mistyped fields
    pub fn from_value(record: &Value) -> BotResult<Self> {
        let fields = record
            .as_object()
            .ok_or_else(|| BotError::Schema("homework record must be an object".to_string()))?;

        let name = fields
            .get("homework_name")
            .ok_or_else(|| BotError::Schema("homework record has no homework_name".to_string()))?
            .as_str()
            .ok_or_else(|| BotError::Schema("homework_name must be a string".to_string()))?;

        let status = match fields.get("status") {
            None => return Err(BotError::Schema("homework record has no status".to_string())),
            Some(Value::String(s)) => s.parse::<HomeworkStatus>()?,
            Some(other) => return Err(BotError::UnknownStatus(other.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

// =============================================================================
// API Response
// =============================================================================

/// Validated body of a homework status response
#[derive(Debug, Clone, PartialEq)]
pub struct StatusesResponse {
    /// Raw records, most recent first
    pub homeworks: Vec<Value>,
    /// Server time, used as the next poll cursor
    pub current_date: i64,
}
