//! JSON bodies exchanged over HTTP. Every required field is modeled as an
//! [`Option`] so that handlers can report which one is missing instead of
//! failing deserialization outright.

use crate::{chat::ChatSession, quiz::QuizQuestion};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub pdf_name: Option<String>,
    /// Ignored: replies are chosen from the message and `pdf_name` alone.
    pub pdf_content: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub pdf_name: Option<String>,
    /// Either `"sample"` or any other marker for user uploads.
    pub pdf_file: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub text: String,
    pub pdf_name: String,
    pub is_uploaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    pub text: Option<String>,
    pub pdf_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    /// Handle used to submit answers for exactly these questions.
    pub quiz_id: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub quiz_id: Option<String>,
    /// Maps question IDs to the submitted answer.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    pub pdf_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub uploaded: Vec<String>,
    pub samples: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ViewerPages {
    pub title: String,
    pub pages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatIdRequest {
    pub chat_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub chat_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistory {
    pub chats: Vec<ChatSession>,
    pub active_chat: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoRequest {
    pub topic: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Video {
    pub title: String,
    pub channel: String,
    pub duration: String,
    pub views: String,
    pub thumbnail: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
