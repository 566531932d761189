use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Validated body of `POST /api/chat`.
#[derive(Debug)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    /// Anything other than exactly `"user"` is treated as assistant output.
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("user") => Role::User,
            _ => Role::Assistant,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(Role::coerce(raw.as_ref().and_then(Value::as_str)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "missing_role")]
    pub role: Role,
    pub content: String,
}

fn missing_role() -> Role {
    Role::coerce(None)
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}
