use super::present;
use crate::{
    content::viewer,
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::wire::PdfRequest;

fn pdf_name(body: &[u8]) -> Result<String> {
    let PdfRequest { pdf_name } = json::parse(body).ok_or(Error::InvalidParams)?;
    present(pdf_name).ok_or(Error::NoPdfName)
}

pub async fn list(app: &App) -> Result<Reply> {
    Ok(json::ok(&app.store.library().await))
}

pub async fn upload(app: &App, body: &[u8]) -> Result<Reply> {
    let name = pdf_name(body)?;
    log::info!("uploading {name}");
    Ok(json::ok(&app.store.upload(name).await?))
}

/// Selects a document, or clears the selection when no name is given.
pub async fn select(app: &App, body: &[u8]) -> Result<Reply> {
    let PdfRequest { pdf_name } = json::parse(body).ok_or(Error::InvalidParams)?;
    Ok(json::ok(&app.store.select(present(pdf_name)).await?))
}

pub async fn delete(app: &App, body: &[u8]) -> Result<Reply> {
    let name = pdf_name(body)?;
    Ok(json::ok(&app.store.delete_pdf(&name).await?))
}

pub async fn reset(app: &App) -> Result<Reply> {
    log::warn!("resetting all uploads and progress");
    Ok(json::ok(&app.store.reset().await?))
}

pub async fn viewer(app: &App, body: &[u8]) -> Result<Reply> {
    let name = pdf_name(body)?;
    let is_uploaded = app.store.is_uploaded(&name).await;
    Ok(json::ok(&viewer::pages(&name, is_uploaded)))
}
