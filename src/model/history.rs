use log::warn;

use crate::model::request::{Content, ProviderRole};
use crate::web::models::{ChatMessage, Role};

impl From<Role> for ProviderRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => ProviderRole::User,
            Role::Assistant => ProviderRole::Model,
        }
    }
}

/// Map caller history into provider turns and make it start with a user turn.
pub fn normalize_history(history: &[ChatMessage]) -> Vec<Content> {
    let contents = history
        .iter()
        .map(|msg| Content::new(msg.role.into(), msg.content.clone()))
        .collect();
    normalize_contents(contents)
}

/// Drop any model-only preamble. A history with no user turn at all cannot
/// seed a conversation, so it is cleared.
pub fn normalize_contents(mut contents: Vec<Content>) -> Vec<Content> {
    match contents.iter().position(|c| c.role == ProviderRole::User) {
        Some(0) => contents,
        Some(first_user) => {
            contents.drain(..first_user);
            contents
        }
        None if contents.is_empty() => contents,
        None => {
            warn!(
                "Chat history contains only model messages ({}); clearing it for a fresh start",
                contents.len()
            );
            Vec::new()
        }
    }
}
