pub mod content;
pub mod error;
mod route;
pub mod scoring;
mod state;
pub mod stats;
mod store;
mod util;

pub use db::Database;
pub use util::json::Reply;

use core::time::Duration;
use error::{Error, Result};
use http_body_util::BodyExt;
use hyper::{body::Body, Method, Request};
use store::Store;
use util::json;

/// Paths served by [`App::respond`], used to tell a wrong method from an unknown path.
const ROUTES: &[&str] = &[
    "/chat",
    "/extractText",
    "/generateQuiz",
    "/pdfs",
    "/pdfs/select",
    "/pdfs/delete",
    "/reset",
    "/viewer",
    "/quiz/submit",
    "/progress",
    "/chats",
    "/chats/open",
    "/chats/delete",
    "/chats/rename",
    "/chats/send",
    "/videos/topics",
    "/videos",
];

pub struct App {
    store: Store,
    /// Simulated latency of the content generators.
    delay: Duration,
}

impl App {
    pub async fn new(db: Database, delay: Duration) -> Self {
        Self { store: Store::load(db).await, delay }
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub async fn respond<B: Body>(&self, req: Request<B>) -> Reply {
        let (parts, body) = req.into_parts();
        let path = parts.uri.path();
        let path = path.strip_prefix("/api").filter(|rest| rest.starts_with('/')).unwrap_or(path);

        // Collect the whole payload up front
        let result = match body.collect().await {
            Ok(collected) => self.try_respond(&parts.method, path, &collected.to_bytes()).await,
            Err(_) => Err(Error::InvalidParams),
        };

        match result {
            Ok(res) => {
                log::debug!("{} {path} -> {}", parts.method, res.status());
                res
            }
            Err(err) => {
                let status = err.status();
                if status.is_server_error() {
                    log::error!("{} {path} -> {status}: {err} ({err:?})", parts.method);
                } else {
                    log::warn!("{} {path} -> {status}: {err}", parts.method);
                }
                json::error(&err)
            }
        }
    }

    async fn try_respond(&self, method: &Method, path: &str, body: &[u8]) -> Result<Reply> {
        use route::{chats, library, progress, quiz, tutor, video};
        match (method, path) {
            (&Method::POST, "/chat") => tutor::chat(self, body).await,
            (&Method::POST, "/extractText") => tutor::extract_text(self, body).await,
            (&Method::POST, "/generateQuiz") => tutor::generate_quiz(self, body).await,
            (&Method::GET, "/pdfs") => library::list(self).await,
            (&Method::POST, "/pdfs") => library::upload(self, body).await,
            (&Method::POST, "/pdfs/select") => library::select(self, body).await,
            (&Method::POST, "/pdfs/delete") => library::delete(self, body).await,
            (&Method::POST, "/reset") => library::reset(self).await,
            (&Method::POST, "/viewer") => library::viewer(self, body).await,
            (&Method::POST, "/quiz/submit") => quiz::submit(self, body).await,
            (&Method::GET, "/progress") => progress::current(self).await,
            (&Method::POST, "/progress") => progress::filtered(self, body).await,
            (&Method::GET, "/chats") => chats::list(self).await,
            (&Method::POST, "/chats") => chats::create(self).await,
            (&Method::POST, "/chats/open") => chats::open(self, body).await,
            (&Method::POST, "/chats/delete") => chats::delete(self, body).await,
            (&Method::POST, "/chats/rename") => chats::rename(self, body).await,
            (&Method::POST, "/chats/send") => chats::send(self, body).await,
            (&Method::GET, "/videos/topics") => video::topics().await,
            (&Method::POST, "/videos") => video::recommend(self, body).await,
            (_, path) if ROUTES.contains(&path) => Err(Error::MethodNotAllowed),
            _ => Err(Error::NotFound),
        }
    }
}
