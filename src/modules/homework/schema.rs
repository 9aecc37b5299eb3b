use serde_json::Value;

/// Error codes the homework API puts in the `code` field of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// `from_date` could not be parsed by the server
    UnknownError,
    /// Token missing, expired or malformed
    NotAuthenticated,
}

impl ApiErrorCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UnknownError" => Some(Self::UnknownError),
            "not_authenticated" => Some(Self::NotAuthenticated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownError => "UnknownError",
            Self::NotAuthenticated => "not_authenticated",
        }
    }
}

/// Pulls the human-readable explanation out of an error payload.
///
/// The API is not consistent here: auth failures carry `message`, timestamp
/// failures nest it as `error.error`. Falls back to the bare code.
pub fn server_message(payload: &Value, code: ApiErrorCode) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            payload
                .get("error")
                .and_then(|e| e.get("error"))
                .and_then(Value::as_str)
        })
        .unwrap_or(code.as_str())
        .to_string()
}
