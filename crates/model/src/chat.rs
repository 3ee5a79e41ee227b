use crate::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
}

/// A tutoring conversation. Messages are append-only.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    /// Either the PDF selected when the session was opened or `General`.
    pub pdf_name: String,
    pub created_at: Timestamp,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Title given to every session until its first message arrives.
    pub const UNTITLED: &'static str = "New Chat";
    /// Subject recorded when no PDF was selected.
    pub const GENERAL: &'static str = "General";
}
