//! Request and response payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /message`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl MessageRequest {
    /// Text of the message, or `None` when it is missing or blank.
    ///
    /// Blank values are `null`, `false`, zero, `""`, `[]` and `{}`. Strings
    /// are taken as-is; any other value is echoed as its JSON text.
    pub fn text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Array(a) if a.is_empty() => None,
            Value::Object(o) if o.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Successful reply from the bot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub response: String,
}

/// Error body returned for 4xx and 5xx responses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
