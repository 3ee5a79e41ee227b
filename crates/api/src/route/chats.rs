use super::present;
use crate::{
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::{
    wire::{ChatIdRequest, RenameRequest, SendRequest},
    Utc,
};

fn chat_id(body: &[u8]) -> Result<String> {
    let ChatIdRequest { chat_id } = json::parse(body).ok_or(Error::InvalidParams)?;
    present(chat_id).ok_or(Error::NoChatId)
}

pub async fn list(app: &App) -> Result<Reply> {
    Ok(json::ok(&app.store.chats().await))
}

pub async fn create(app: &App) -> Result<Reply> {
    Ok(json::ok(&app.store.new_chat(Utc::now()).await?))
}

pub async fn open(app: &App, body: &[u8]) -> Result<Reply> {
    let id = chat_id(body)?;
    Ok(json::ok(&app.store.open_chat(&id).await?))
}

pub async fn delete(app: &App, body: &[u8]) -> Result<Reply> {
    let id = chat_id(body)?;
    Ok(json::ok(&app.store.delete_chat(&id).await?))
}

pub async fn rename(app: &App, body: &[u8]) -> Result<Reply> {
    let RenameRequest { chat_id, title } = json::parse(body).ok_or(Error::InvalidParams)?;
    let id = present(chat_id).ok_or(Error::NoChatId)?;
    let title = title.filter(|title| !title.trim().is_empty()).ok_or(Error::NoTitle)?;
    Ok(json::ok(&app.store.rename_chat(&id, title).await?))
}

pub async fn send(app: &App, body: &[u8]) -> Result<Reply> {
    let SendRequest { message } = json::parse(body).ok_or(Error::NoMessage)?;
    let message = message.filter(|message| !message.trim().is_empty()).ok_or(Error::NoMessage)?;

    app.pause().await;
    Ok(json::ok(&app.store.send(message, Utc::now()).await?))
}
