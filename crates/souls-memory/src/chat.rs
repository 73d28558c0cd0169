//! Chat-completion message payloads built from memory records.

use crate::content::Content;
use crate::model::NewMemory;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// One message as sent to a chat-completion API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NewMemory {
    /// Message payload for this record. Region, metadata and extra keys stay behind.
    pub fn to_chat_message(&self) -> ChatMessage {
        ChatMessage {
            role: self.role,
            content: self.content.clone(),
            name: self.name.clone(),
        }
    }
}

impl From<NewMemory> for ChatMessage {
    fn from(memory: NewMemory) -> Self {
        Self {
            role: memory.role,
            content: memory.content,
            name: memory.name,
        }
    }
}
