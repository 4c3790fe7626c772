//! Response validation and status message formatting.

use serde_json::Value;

use crate::error::{BotError, BotResult};
use crate::models::{Homework, StatusesResponse};

/// Message sent when the API reports no homework in the queried window
pub const NO_UPDATES_MESSAGE: &str = "No updates";

/// Checks the shape of a homework status response.
///
/// The payload must be an object with a `homeworks` array and an integer
/// `current_date`. Records inside `homeworks` are returned untouched; they are
/// decoded one at a time by [`format_status`].
pub fn validate_response(payload: &Value) -> BotResult<StatusesResponse> {
    let body = payload
        .as_object()
        .ok_or_else(|| BotError::Schema("response must be a JSON object".to_string()))?;

    let homeworks = body
        .get("homeworks")
        .ok_or_else(|| BotError::Schema("response has no homeworks key".to_string()))?;

    let current_date = body
        .get("current_date")
        .ok_or_else(|| BotError::Schema("response has no current_date key".to_string()))?;

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| BotError::Schema("homeworks must be a list".to_string()))?;

    let current_date = current_date
        .as_i64()
        .ok_or_else(|| BotError::Schema("current_date must be an integer".to_string()))?;

    Ok(StatusesResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}

/// Builds the notification text for a single homework record
pub fn format_status(record: &Value) -> BotResult<String> {
    let homework = Homework::from_value(record)?;

    Ok(format!(
        "Changed status for \"{}\". {}.",
        homework.name,
        homework.status.verdict()
    ))
}
