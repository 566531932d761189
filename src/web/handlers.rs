use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::RelayError;
use crate::web::models::ChatResponse;
use crate::web::validation::validate_chat_request;
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, RelayError> {
    let request_id = Uuid::new_v4().to_string();

    let chat = validate_chat_request(&body).map_err(|e| {
        warn!("[{}] Rejected chat request: {}", request_id, e);
        e
    })?;

    match data.model.reply(&request_id, &chat).await {
        Ok(response) => {
            info!("[{}] Response length: {} characters", request_id, response.len());
            Ok(HttpResponse::Ok().json(ChatResponse { response }))
        }
        Err(e) => {
            error!("[{}] Chat relay failed: {}", request_id, e);
            Err(e)
        }
    }
}

/// Turn body extraction failures into the same `{error}` contract as
/// validation failures.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Unreadable chat request body: {}", err);
    RelayError::Validation("Request body must be valid JSON.".to_string()).into()
}
