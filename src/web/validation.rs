use serde_json::Value;

use crate::error::RelayError;
use crate::web::models::{ChatMessage, ChatRequest};

pub const MESSAGE_REQUIRED: &str = "The 'message' field is required and must be a non-empty string.";

/// Check a raw `POST /api/chat` body before anything is sent upstream.
///
/// Returns the trimmed message and the parsed (not yet normalized) history.
pub fn validate_chat_request(body: &Value) -> Result<ChatRequest, RelayError> {
    let object = body
        .as_object()
        .ok_or_else(|| RelayError::Validation("Request body must be a JSON object.".to_string()))?;

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| RelayError::Validation(MESSAGE_REQUIRED.to_string()))?;

    let history = match object.get("history") {
        None | Some(Value::Null) => Vec::new(),
        Some(raw) => serde_json::from_value::<Vec<ChatMessage>>(raw.clone()).map_err(|e| {
            RelayError::Validation(format!(
                "The 'history' field must be a list of {{role, content}} entries: {}",
                e
            ))
        })?,
    };

    Ok(ChatRequest {
        message: message.to_string(),
        history,
    })
}
