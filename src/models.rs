use serde::{Deserialize, Serialize};

/// Who authored a message. The provider has no system role, so none is
/// representable here; the system instructions travel inside the first
/// user entry instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// One `POST /chat` call: the transcript so far plus the latest user message.
/// Discarded once the call completes; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<Message>,
    pub new_message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub assistant_message: Message,
    pub status: String,
}

impl ChatResponse {
    pub fn ok(assistant_message: Message) -> Self {
        Self {
            assistant_message,
            status: "ok".to_string(),
        }
    }
}
