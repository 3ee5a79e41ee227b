use crate::{
    content::sample,
    error::{Error, Result},
    scoring,
    state::State,
    stats,
    util::id::Ids,
};
use dashmap::DashMap;
use db::{Database, Key};
use model::{
    progress::ProgressStats,
    quiz::{QuizAttempt, QuizQuestion},
    wire::{ChatHistory, Library},
    Timestamp,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Upper bound on quizzes held for grading at once.
const MAX_PENDING_QUIZZES: usize = 16;

/// A generated quiz awaiting its single submission.
struct PendingQuiz {
    pdf_name: String,
    questions: Vec<QuizQuestion>,
    submitted: bool,
}

/// Learner state backed by the database. Every mutation persists the keys it
/// touched before the lock is released.
pub struct Store {
    db: Database,
    state: Mutex<State>,
    quizzes: DashMap<String, PendingQuiz>,
    ids: Ids,
}

async fn load_or_default<T: DeserializeOwned + Default>(db: &Database, key: Key) -> T {
    match db.load(key).await {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            log::warn!("discarding unreadable {} blob: {err}", key.name());
            T::default()
        }
    }
}

fn library(state: &State) -> Library {
    Library {
        uploaded: state.uploaded.clone(),
        samples: sample::names().map(String::from).collect(),
        selected: state.selected.clone(),
    }
}

fn history(state: &State) -> ChatHistory {
    ChatHistory { chats: state.chats.clone(), active_chat: state.active_chat.clone() }
}

impl Store {
    pub async fn load(db: Database) -> Self {
        let uploaded = load_or_default(&db, Key::UploadedPdfs).await;
        let chats = load_or_default(&db, Key::ChatHistory).await;
        let progress = load_or_default(&db, Key::QuizProgress).await;
        let state = State::new(uploaded, chats, progress);
        log::info!(
            "loaded {} uploads, {} chats, and {} attempts",
            state.uploaded.len(),
            state.chats.len(),
            state.progress.len()
        );
        Self { db, state: Mutex::new(state), quizzes: DashMap::new(), ids: Ids::default() }
    }

    async fn persist(&self, state: &State, keys: &[Key]) -> Result<()> {
        for &key in keys {
            match key {
                Key::UploadedPdfs => self.db.save(key, &state.uploaded).await?,
                Key::ChatHistory => self.db.save(key, &state.chats).await?,
                Key::QuizProgress => self.db.save(key, &state.progress).await?,
            }
        }
        Ok(())
    }

    /// Saves `next` under `keys` and only then makes it the live state, so a
    /// failed save leaves memory as it was.
    async fn commit(&self, state: &mut State, next: State, keys: &[Key]) -> Result<()> {
        self.persist(&next, keys).await?;
        *state = next;
        Ok(())
    }

    pub async fn library(&self) -> Library {
        library(&*self.state.lock().await)
    }

    pub async fn is_uploaded(&self, name: &str) -> bool {
        self.state.lock().await.is_uploaded(name)
    }

    pub async fn selected(&self) -> Option<String> {
        self.state.lock().await.selected.clone()
    }

    pub async fn upload(&self, name: String) -> Result<Library> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        if next.upload(name)? {
            self.commit(&mut state, next, &[Key::UploadedPdfs]).await?;
        } else {
            // Only the selection moved.
            *state = next;
        }
        Ok(library(&state))
    }

    pub async fn select(&self, name: Option<String>) -> Result<Library> {
        let mut state = self.state.lock().await;
        state.select(name)?;
        Ok(library(&state))
    }

    pub async fn delete_pdf(&self, name: &str) -> Result<Library> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let removed = next.delete_pdf(name);
        self.commit(&mut state, next, &[Key::UploadedPdfs, Key::QuizProgress]).await?;
        log::info!("deleted {name} along with {removed} attempts");
        Ok(library(&state))
    }

    pub async fn reset(&self) -> Result<Library> {
        let mut state = self.state.lock().await;
        for key in [Key::UploadedPdfs, Key::QuizProgress] {
            self.db.remove(key).await?;
        }
        state.reset_all();
        self.quizzes.clear();
        Ok(library(&state))
    }

    pub async fn progress(&self, pdf_name: Option<&str>) -> ProgressStats {
        stats::summarize(&self.state.lock().await.progress, pdf_name)
    }

    pub async fn chats(&self) -> ChatHistory {
        history(&*self.state.lock().await)
    }

    pub async fn new_chat(&self, now: Timestamp) -> Result<ChatHistory> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.new_chat(self.ids.next(now), now);
        self.commit(&mut state, next, &[Key::ChatHistory]).await?;
        Ok(history(&state))
    }

    pub async fn open_chat(&self, id: &str) -> Result<ChatHistory> {
        let mut state = self.state.lock().await;
        state.open_chat(id)?;
        Ok(history(&state))
    }

    pub async fn delete_chat(&self, id: &str) -> Result<ChatHistory> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.delete_chat(id)?;
        self.commit(&mut state, next, &[Key::ChatHistory]).await?;
        Ok(history(&state))
    }

    pub async fn rename_chat(&self, id: &str, title: String) -> Result<ChatHistory> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.rename_chat(id, title)?;
        self.commit(&mut state, next, &[Key::ChatHistory]).await?;
        Ok(history(&state))
    }

    pub async fn send(&self, message: String, now: Timestamp) -> Result<ChatHistory> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.send(message, || self.ids.next(now), now)?;
        self.commit(&mut state, next, &[Key::ChatHistory]).await?;
        Ok(history(&state))
    }

    /// Holds `questions` for grading and returns the handle to submit them with.
    /// A new quiz replaces every earlier one on the same document, and submitted
    /// quizzes are forgotten. At most [`MAX_PENDING_QUIZZES`] are kept, oldest
    /// evicted first.
    pub fn register_quiz(&self, pdf_name: String, questions: Vec<QuizQuestion>, now: Timestamp) -> String {
        self.quizzes.retain(|_, quiz| !quiz.submitted && quiz.pdf_name != pdf_name);
        while self.quizzes.len() >= MAX_PENDING_QUIZZES {
            // IDs are decimal and strictly increasing.
            let oldest =
                self.quizzes.iter().map(|entry| entry.key().clone()).min_by(|a, b| (a.len(), a).cmp(&(b.len(), b)));
            let Some(oldest) = oldest else { break };
            self.quizzes.remove(&oldest);
        }

        let id = self.ids.next(now);
        self.quizzes.insert(id.clone(), PendingQuiz { pdf_name, questions, submitted: false });
        id
    }

    /// Grades a pending quiz and records the attempt. Each quiz is graded once;
    /// if the attempt cannot be saved, the quiz may be submitted again.
    pub async fn submit(&self, quiz_id: &str, answers: &HashMap<String, String>, now: Timestamp) -> Result<QuizAttempt> {
        let attempt = {
            let mut quiz = self.quizzes.get_mut(quiz_id).ok_or(Error::UnknownQuiz)?;
            if quiz.submitted {
                return Err(Error::AlreadySubmitted);
            }
            let attempt = scoring::submit(self.ids.next(now), quiz.pdf_name.clone(), &quiz.questions, answers, now)?;
            quiz.submitted = true;
            attempt
        };

        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.record(attempt.clone());
        if let Err(err) = self.commit(&mut state, next, &[Key::QuizProgress]).await {
            if let Some(mut quiz) = self.quizzes.get_mut(quiz_id) {
                quiz.submitted = false;
            }
            return Err(err);
        }

        log::info!("recorded attempt {} on {} with score {}", attempt.id, attempt.pdf_name, attempt.score);
        Ok(attempt)
    }
}
