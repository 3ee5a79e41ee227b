//! Endpoints backed by the canned content generators.

use super::present;
use crate::{
    content::{chat, extract, quiz},
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::{
    wire::{ChatReply, ChatRequest, ExtractRequest, GeneratedQuiz, QuizRequest},
    Utc,
};

pub async fn chat(app: &App, body: &[u8]) -> Result<Reply> {
    let ChatRequest { message, pdf_name, .. } = json::parse(body).ok_or(Error::NoMessage)?;
    let message = present(message).ok_or(Error::NoMessage)?;
    log::info!("chat message about {pdf_name:?}");

    app.pause().await;
    let response = chat::reply(&message, pdf_name.as_deref());
    Ok(json::ok(&ChatReply { response }))
}

pub async fn extract_text(app: &App, body: &[u8]) -> Result<Reply> {
    let ExtractRequest { pdf_name, pdf_file } = json::parse(body).ok_or(Error::ExtractFailed)?;
    let pdf_name = present(pdf_name).ok_or(Error::NoPdfName)?;
    log::info!("extracting text from {pdf_name}");

    app.pause().await;
    Ok(json::ok(&extract::extract(&pdf_name, pdf_file.as_deref())))
}

pub async fn generate_quiz(app: &App, body: &[u8]) -> Result<Reply> {
    // Validate the source material
    let QuizRequest { text, pdf_name } = json::parse(body).ok_or(Error::GenerateFailed)?;
    let text = present(text).ok_or(Error::NoText)?;
    let pdf_name = present(pdf_name).ok_or(Error::GenerateFailed)?;
    log::info!("generating quiz for {pdf_name} from {} bytes of text", text.len());

    // Hold the questions until the learner submits their answers
    app.pause().await;
    let questions = quiz::generate(&text, &pdf_name);
    let quiz_id = app.store.register_quiz(pdf_name, questions.clone(), Utc::now());
    Ok(json::ok(&GeneratedQuiz { quiz_id, questions }))
}
