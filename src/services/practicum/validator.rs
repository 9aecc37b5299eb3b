use serde_json::Value;

use crate::modules::homework::schema::{server_message, ApiErrorCode};
use crate::services::monitor::BotError;

/// Checks a decoded API payload and returns the most recent homework, if any.
///
/// Error payloads with a known `code` map to typed errors. An empty
/// `homeworks` list is a normal "nothing new" answer and yields `Ok(None)`.
pub fn check_response(payload: &Value) -> Result<Option<&Value>, BotError> {
    let object = payload
        .as_object()
        .ok_or_else(|| BotError::Shape("expected object".to_string()))?;

    if let Some(code) = object
        .get("code")
        .and_then(Value::as_str)
        .and_then(ApiErrorCode::from_code)
    {
        let message = server_message(payload, code);
        return Err(match code {
            ApiErrorCode::UnknownError => BotError::Timestamp(message),
            ApiErrorCode::NotAuthenticated => BotError::Auth(message),
        });
    }

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| BotError::Shape("homeworks is not a list".to_string()))?;

    match homeworks.first() {
        Some(latest) => Ok(Some(latest)),
        None => {
            tracing::debug!("No homework updates");
            Ok(None)
        }
    }
}
