use super::present;
use crate::{
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::wire::PdfRequest;

/// Statistics of the selected document, or of everything if none is selected.
pub async fn current(app: &App) -> Result<Reply> {
    let selected = app.store.selected().await;
    Ok(json::ok(&app.store.progress(selected.as_deref()).await))
}

/// Statistics of the named document. An empty body covers every document.
pub async fn filtered(app: &App, body: &[u8]) -> Result<Reply> {
    let PdfRequest { pdf_name } =
        if body.is_empty() { PdfRequest::default() } else { json::parse(body).ok_or(Error::InvalidParams)? };
    let pdf_name = present(pdf_name);
    Ok(json::ok(&app.store.progress(pdf_name.as_deref()).await))
}
