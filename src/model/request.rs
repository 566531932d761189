use serde::Serialize;

use crate::config::{GenerationConfig, RelayConfig, SafetySetting};

/// Gemini's own role vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: ProviderRole,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: ProviderRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.parts.first().map(|p| p.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub contents: Vec<Content>,
    pub system_instruction: SystemInstruction,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

/// Append the new message as the final user turn after the normalized history.
pub fn build_request(config: &RelayConfig, history: Vec<Content>, message: &str) -> ProviderRequest {
    let mut contents = history;
    contents.push(Content::new(ProviderRole::User, message));

    ProviderRequest {
        contents,
        system_instruction: SystemInstruction {
            parts: vec![Part {
                text: config.system_instruction.clone(),
            }],
        },
        generation_config: config.generation,
        safety_settings: config.safety_settings.clone(),
    }
}
