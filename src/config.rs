use std::env;
use log::{info, warn};
use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const MAX_OUTPUT_TOKENS: u32 = 512;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

pub const SYSTEM_INSTRUCTION: &str = concat!(
    "Tu es un assistant d’orientation professionnelle. ",
    "Tu aides l’utilisateur à explorer ses options de carrière, ",
    "à analyser ses compétences et à formuler des conseils clairs. ",
    "**Si une question n'est pas directement liée à l'orientation professionnelle, ",
    "tu dois gentiment l'indiquer et inviter l'utilisateur à se concentrer sur ce sujet.**",
);

/// Sampling parameters sent with every request. Fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

pub fn default_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting {
            category: "HARM_CATEGORY_HARASSMENT",
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        },
        SafetySetting {
            category: "HARM_CATEGORY_HATE_SPEECH",
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        },
    ]
}

/// Process-wide settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub generation: GenerationConfig,
    pub system_instruction: String,
    pub safety_settings: Vec<SafetySetting>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            generation: GenerationConfig::default(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            safety_settings: default_safety_settings(),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            // Not fatal at startup; every chat request will fail until it is set.
            warn!("GEMINI_API_KEY is not set; chat requests will be rejected");
        }

        let base_url = env::var("GEMINI_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.model);
        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        info!("Using Gemini model {} at {}", model, base_url);

        Self {
            host,
            port,
            base_url,
            model,
            api_key,
            ..defaults
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}
