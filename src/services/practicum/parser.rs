use serde_json::Value;

use crate::modules::homework::HomeworkStatus;
use crate::services::monitor::BotError;

/// Builds the chat message for a homework record.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingName)?;

    let status = match homework.get("status") {
        Some(Value::String(code)) => {
            HomeworkStatus::from_code(code).ok_or_else(|| BotError::UnknownStatus(code.clone()))?
        }
        Some(other) => return Err(BotError::UnknownStatus(other.to_string())),
        None => return Err(BotError::UnknownStatus("<missing>".to_string())),
    };

    tracing::debug!("Homework {:?} has status {}", name, status.as_str());

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
