use crate::{
    content::video,
    error::{Error, Result},
    util::json::{self, Reply},
    App,
};
use model::wire::VideoRequest;

pub async fn topics() -> Result<Reply> {
    Ok(json::ok(video::SUGGESTED_TOPICS))
}

pub async fn recommend(app: &App, body: &[u8]) -> Result<Reply> {
    let VideoRequest { topic } = json::parse(body).ok_or(Error::InvalidParams)?;
    let topic = topic.filter(|topic| !topic.trim().is_empty()).ok_or(Error::NoTopic)?;

    app.pause().await;
    Ok(json::ok(&video::recommend(topic.trim())))
}
