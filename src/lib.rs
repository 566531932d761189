pub mod config;
pub mod error;
pub mod model;
pub mod web;

use config::RelayConfig;
use model::GeminiModel;

// App state structure
pub struct AppState {
    pub model: GeminiModel,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            model: GeminiModel::new(config),
        }
    }
}
