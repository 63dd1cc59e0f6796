//! Per-session chat state, owned by the hosting shell.

use berea_verse::VerseText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One message in a session's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Assistant message that opens every new session.
pub const GREETING: &str = "Hello! I'm your Bible study assistant. Ask me anything about \
Scripture!\n\nTry asking about:\n- Salvation\n- Prayer\n- Love\n- Faith\n- Hope";

/// Per-session context. Created at session start, cleared at session end;
/// the pipeline itself never holds onto one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub history: Vec<ChatMessage>,
    /// Last verse the session looked up, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_verse: Option<VerseText>,
}

impl ChatSession {
    /// Start a session seeded with the assistant greeting.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Start a session under a caller-chosen id.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            history: vec![ChatMessage::assistant(GREETING)],
            current_verse: None,
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(ChatMessage::assistant(content));
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
