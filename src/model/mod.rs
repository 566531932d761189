pub mod history;
pub mod request;
pub mod response;

use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::{ProviderError, RelayError};
use crate::web::models::ChatRequest;

use self::history::normalize_history;
use self::request::{build_request, ProviderRequest};
use self::response::map_response;

// A wrapper for the Gemini generateContent API
pub struct GeminiModel {
    config: RelayConfig,
    client: Client,
}

impl GeminiModel {
    pub fn new(config: RelayConfig) -> Self {
        info!("Initializing Gemini client for {}", config.endpoint());
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Normalize, build, send and map one validated chat request.
    pub async fn reply(&self, request_id: &str, chat: &ChatRequest) -> Result<String, RelayError> {
        let history = normalize_history(&chat.history);
        info!(
            "[{}] Relaying message ({} chars) with {} of {} history turns",
            request_id,
            chat.message.len(),
            history.len(),
            chat.history.len()
        );
        debug!("[{}] Message: {}", request_id, chat.message);

        let payload = build_request(&self.config, history, &chat.message);
        let response_json = self.generate(request_id, &payload).await?;
        Ok(map_response(&response_json))
    }

    /// Single attempt against the provider; no retries.
    pub async fn generate(&self, request_id: &str, payload: &ProviderRequest) -> Result<Value, RelayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| RelayError::Configuration("GEMINI_API_KEY is missing".to_string()))?;

        let url = self.config.endpoint();
        debug!("[{}] Sending {} turns to {}", request_id, payload.contents.len(), url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(payload)
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response_json: Value = response.json().await.map_err(ProviderError::from)?;
        debug!("[{}] Response JSON: {}", request_id, response_json);
        Ok(response_json)
    }
}
