use crate::{
    content::{chat, sample},
    error::{Error, Result},
};
use model::{
    chat::{ChatMessage, ChatSession, Sender},
    quiz::QuizAttempt,
    Timestamp,
};

/// Characters of the first message kept when titling a fresh session.
const TITLE_PREFIX: usize = 30;

/// In-memory view of everything a learner has done.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub uploaded: Vec<String>,
    pub chats: Vec<ChatSession>,
    pub progress: Vec<QuizAttempt>,
    pub selected: Option<String>,
    pub active_chat: Option<String>,
}

impl State {
    pub fn new(uploaded: Vec<String>, chats: Vec<ChatSession>, progress: Vec<QuizAttempt>) -> Self {
        let active_chat = chats.first().map(|chat| chat.id.clone());
        Self { uploaded, chats, progress, selected: None, active_chat }
    }

    pub fn is_uploaded(&self, name: &str) -> bool {
        self.uploaded.iter().any(|pdf| pdf == name)
    }

    /// Whether `name` refers to an uploaded document or a bundled sample.
    pub fn is_known(&self, name: &str) -> bool {
        self.is_uploaded(name) || sample::find(name).is_some()
    }

    /// Records an upload and selects it. Returns `true` if the name was new.
    pub fn upload(&mut self, name: String) -> Result<bool> {
        if !is_pdf(&name) {
            return Err(Error::NotPdf);
        }

        let added = !self.is_uploaded(&name);
        if added {
            self.uploaded.push(name.clone());
        }
        self.selected = Some(name);
        Ok(added)
    }

    pub fn select(&mut self, name: Option<String>) -> Result<()> {
        if let Some(name) = name.as_deref() {
            if !self.is_known(name) {
                return Err(Error::UnknownPdf);
            }
        }
        self.selected = name;
        Ok(())
    }

    /// Forgets an uploaded document along with every attempt made on it.
    /// Returns the number of attempts removed.
    pub fn delete_pdf(&mut self, name: &str) -> usize {
        self.uploaded.retain(|pdf| pdf != name);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }

        let before = self.progress.len();
        self.progress.retain(|attempt| attempt.pdf_name != name);
        before - self.progress.len()
    }

    /// Clears uploads, selection, and progress. Chat history is kept.
    pub fn reset_all(&mut self) {
        self.uploaded.clear();
        self.progress.clear();
        self.selected = None;
    }

    pub fn record(&mut self, attempt: QuizAttempt) {
        self.progress.push(attempt);
    }

    /// Opens a fresh session at the top of the history and activates it.
    pub fn new_chat(&mut self, id: String, now: Timestamp) -> &ChatSession {
        let pdf_name = self.selected.clone().unwrap_or_else(|| String::from(ChatSession::GENERAL));
        let session =
            ChatSession { id, title: String::from(ChatSession::UNTITLED), pdf_name, created_at: now, messages: Vec::new() };
        self.active_chat = Some(session.id.clone());
        self.chats.insert(0, session);
        &self.chats[0]
    }

    pub fn delete_chat(&mut self, id: &str) -> Result<()> {
        let index = self.chats.iter().position(|chat| chat.id == id).ok_or(Error::UnknownChat)?;
        self.chats.remove(index);
        if self.active_chat.as_deref() == Some(id) {
            self.active_chat = self.chats.first().map(|chat| chat.id.clone());
        }
        Ok(())
    }

    pub fn rename_chat(&mut self, id: &str, title: String) -> Result<()> {
        let chat = self.chats.iter_mut().find(|chat| chat.id == id).ok_or(Error::UnknownChat)?;
        chat.title = title;
        Ok(())
    }

    /// Activates an existing session.
    pub fn open_chat(&mut self, id: &str) -> Result<()> {
        if !self.chats.iter().any(|chat| chat.id == id) {
            return Err(Error::UnknownChat);
        }
        self.active_chat = Some(String::from(id));
        Ok(())
    }

    /// Appends `message` and the tutor's reply to the active session, opening
    /// one first if none is active. `ids` yields the IDs of the new records.
    pub fn send(&mut self, message: String, mut ids: impl FnMut() -> String, now: Timestamp) -> Result<&ChatSession> {
        if message.trim().is_empty() {
            return Err(Error::NoMessage);
        }

        let active = self.active_chat.as_deref().and_then(|id| self.chats.iter().position(|chat| chat.id == id));
        let index = match active {
            Some(index) => index,
            None => {
                self.new_chat(ids(), now);
                0
            }
        };

        let response = chat::reply(&message, self.selected.as_deref());
        let session = &mut self.chats[index];
        if session.title == ChatSession::UNTITLED {
            let mut title: String = message.chars().take(TITLE_PREFIX).collect();
            title.push_str("...");
            session.title = title;
        }

        session.messages.push(ChatMessage { id: ids(), content: message, sender: Sender::User, timestamp: now });
        session.messages.push(ChatMessage { id: ids(), content: response, sender: Sender::Bot, timestamp: now });
        Ok(session)
    }
}

fn is_pdf(name: &str) -> bool {
    let len = name.len();
    len > 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::quiz::AttemptQuestion;

    fn now() -> Timestamp {
        Timestamp::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    fn counter() -> impl FnMut() -> String {
        let mut next = 0;
        move || {
            next += 1;
            next.to_string()
        }
    }

    fn attempt(pdf_name: &str) -> QuizAttempt {
        QuizAttempt {
            id: String::from("a"),
            pdf_name: String::from(pdf_name),
            score: 50,
            total_questions: 2,
            correct_answers: 1,
            timestamp: now(),
            topics: vec![String::from("Motion")],
            questions: Vec::<AttemptQuestion>::new(),
        }
    }

    #[test]
    fn uploads_only_pdfs() {
        let mut state = State::default();
        assert!(matches!(state.upload(String::from("notes.txt")), Err(Error::NotPdf)));
        assert!(matches!(state.upload(String::from(".pdf")), Err(Error::NotPdf)));
        assert!(state.upload(String::from("Notes.PDF")).unwrap());
        assert!(!state.upload(String::from("Notes.PDF")).unwrap());
        assert_eq!(state.uploaded, ["Notes.PDF"]);
        assert_eq!(state.selected.as_deref(), Some("Notes.PDF"));
    }

    #[test]
    fn selects_known_documents() {
        let mut state = State::default();
        let sample = sample::names().next().unwrap();
        state.select(Some(String::from(sample))).unwrap();
        assert_eq!(state.selected.as_deref(), Some(sample));
        assert!(matches!(state.select(Some(String::from("missing.pdf"))), Err(Error::UnknownPdf)));
        state.select(None).unwrap();
        assert!(state.selected.is_none());
    }

    #[test]
    fn deleting_pdf_cascades_to_attempts() {
        let mut state = State::default();
        state.upload(String::from("a.pdf")).unwrap();
        state.upload(String::from("b.pdf")).unwrap();
        state.record(attempt("a.pdf"));
        state.record(attempt("b.pdf"));
        state.record(attempt("b.pdf"));

        assert_eq!(state.delete_pdf("b.pdf"), 2);
        assert_eq!(state.uploaded, ["a.pdf"]);
        assert!(state.selected.is_none());
        assert!(state.progress.iter().all(|attempt| attempt.pdf_name == "a.pdf"));
    }

    #[test]
    fn reset_keeps_chats() {
        let mut state = State::default();
        state.upload(String::from("a.pdf")).unwrap();
        state.record(attempt("a.pdf"));
        state.new_chat(String::from("c"), now());
        state.reset_all();
        assert!(state.uploaded.is_empty());
        assert!(state.progress.is_empty());
        assert!(state.selected.is_none());
        assert_eq!(state.chats.len(), 1);
    }

    #[test]
    fn new_chats_are_prepended_and_active() {
        let mut state = State::default();
        assert_eq!(state.new_chat(String::from("1"), now()).pdf_name, "General");
        state.upload(String::from("Physics.pdf")).unwrap();
        let chat = state.new_chat(String::from("2"), now());
        assert_eq!(chat.title, "New Chat");
        assert_eq!(chat.pdf_name, "Physics.pdf");
        assert_eq!(state.chats[0].id, "2");
        assert_eq!(state.active_chat.as_deref(), Some("2"));
    }

    #[test]
    fn deleting_active_chat_activates_first() {
        let mut state = State::default();
        state.new_chat(String::from("1"), now());
        state.new_chat(String::from("2"), now());
        state.new_chat(String::from("3"), now());
        state.open_chat("2").unwrap();

        state.delete_chat("3").unwrap();
        assert_eq!(state.active_chat.as_deref(), Some("2"));
        state.delete_chat("2").unwrap();
        assert_eq!(state.active_chat.as_deref(), Some("1"));
        state.delete_chat("1").unwrap();
        assert!(state.active_chat.is_none());
        assert!(matches!(state.delete_chat("1"), Err(Error::UnknownChat)));
    }

    #[test]
    fn renames_chats() {
        let mut state = State::default();
        state.new_chat(String::from("1"), now());
        state.rename_chat("1", String::from("Kinematics")).unwrap();
        assert_eq!(state.chats[0].title, "Kinematics");
        assert!(matches!(state.rename_chat("2", String::new()), Err(Error::UnknownChat)));
    }

    #[test]
    fn sending_opens_and_titles_a_session() {
        let mut state = State::default();
        assert!(matches!(state.send(String::from("  "), counter(), now()), Err(Error::NoMessage)));
        assert!(state.chats.is_empty());

        let message = "Explain the difference between speed and velocity please";
        let chat = state.send(String::from(message), counter(), now()).unwrap();
        assert_eq!(chat.id, "1");
        assert_eq!(chat.title, "Explain the difference between...");
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0].sender, Sender::User);
        assert_eq!(chat.messages[0].content, message);
        assert_eq!(chat.messages[1].sender, Sender::Bot);
        assert_eq!(state.active_chat.as_deref(), Some("1"));

        let chat = state.send(String::from("And acceleration?"), counter(), now()).unwrap();
        assert_eq!(chat.title, "Explain the difference between...");
        assert_eq!(chat.messages.len(), 4);
    }

    #[test]
    fn loading_activates_first_session() {
        let mut state = State::default();
        state.new_chat(String::from("1"), now());
        state.new_chat(String::from("2"), now());
        let state = State::new(Vec::new(), state.chats, Vec::new());
        assert_eq!(state.active_chat.as_deref(), Some("2"));
    }
}
