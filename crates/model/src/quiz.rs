use crate::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice. Always carries options.
    Mcq,
    /// Short answer.
    Saq,
    /// Long answer.
    Laq,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mcq => "Multiple Choice",
            Self::Saq => "Short Answer",
            Self::Laq => "Long Answer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single generated question. Immutable for the lifetime of an attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Compared by exact string equality against the submitted answer.
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub topic: String,
}

/// The answer record of one question inside a submitted attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptQuestion {
    pub id: String,
    pub question: String,
    /// Absent when the question was left unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl AttemptQuestion {
    pub fn is_correct(&self) -> bool {
        self.user_answer.as_deref() == Some(self.correct_answer.as_str())
    }
}

/// One completed quiz submission. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub pdf_name: String,
    /// Percentage in `0..=100`.
    pub score: u8,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub timestamp: Timestamp,
    pub topics: Vec<String>,
    pub questions: Vec<AttemptQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_uses_wire_names() {
        let question = QuizQuestion {
            id: String::from("2"),
            kind: QuestionKind::Saq,
            question: String::from("Explain inertia."),
            options: None,
            correct_answer: String::from("Resistance to change in motion."),
            explanation: String::from("Newton's first law."),
            difficulty: Difficulty::Medium,
            topic: String::from("Forces"),
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "saq");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["correctAnswer"], "Resistance to change in motion.");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn unanswered_question_is_never_correct() {
        let mut question = AttemptQuestion {
            id: String::from("1"),
            question: String::from("SI unit of force?"),
            user_answer: None,
            correct_answer: String::from("Newton"),
            topic: String::from("Forces"),
            difficulty: Difficulty::Easy,
        };
        assert!(!question.is_correct());
        question.user_answer = Some(String::from("newton"));
        assert!(!question.is_correct());
        question.user_answer = Some(String::from("Newton"));
        assert!(question.is_correct());
    }

    #[test]
    fn labels_question_kinds() {
        assert_eq!(QuestionKind::Mcq.label(), "Multiple Choice");
        assert_eq!(QuestionKind::Saq.label(), "Short Answer");
        assert_eq!(QuestionKind::Laq.label(), "Long Answer");
    }
}
