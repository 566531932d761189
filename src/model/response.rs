use serde_json::Value;

pub const FALLBACK_RESPONSE: &str =
    "Désolé, je n'ai pas pu générer de réponse. Pouvez-vous reformuler votre question ?";

/// Pull `candidates[0].content.parts[0].text` out of a Gemini reply.
///
/// Returns `None` when the path is missing, not a string, or blank; a
/// safety-blocked reply has no parts at all.
pub fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

pub fn map_response(response: &Value) -> String {
    extract_text(response).unwrap_or(FALLBACK_RESPONSE).to_string()
}
