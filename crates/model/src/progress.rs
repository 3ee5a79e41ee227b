use crate::quiz::QuizAttempt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    /// At least 80%.
    Excellent,
    /// At least 60%.
    Fair,
    NeedsWork,
}

impl From<u8> for ScoreBand {
    fn from(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAccuracy {
    pub topic: String,
    pub correct: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAttempt {
    #[serde(flatten)]
    pub attempt: QuizAttempt,
    pub band: ScoreBand,
}

/// Summary statistics over a set of attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_quizzes: u32,
    pub average_score: u8,
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Per-topic tallies in order of first appearance.
    pub topics: Vec<TopicAccuracy>,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub study_streak: u32,
    /// Estimated minutes spent studying.
    pub time_spent: u32,
    /// Newest first.
    pub recent_attempts: Vec<RecentAttempt>,
}

#[cfg(test)]
mod tests {
    use super::ScoreBand;

    #[test]
    fn bands_scores() {
        assert_eq!(ScoreBand::from(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from(59), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from(0), ScoreBand::NeedsWork);
    }
}
