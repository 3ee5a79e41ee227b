use super::present;
use crate::{
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::{wire::SubmitRequest, Utc};

pub async fn submit(app: &App, body: &[u8]) -> Result<Reply> {
    let SubmitRequest { quiz_id, answers } = json::parse(body).ok_or(Error::InvalidParams)?;
    let quiz_id = present(quiz_id).ok_or(Error::NoQuizId)?;
    let attempt = app.store.submit(&quiz_id, &answers, Utc::now()).await?;
    Ok(json::ok(&attempt))
}
