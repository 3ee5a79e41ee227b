use chrono::{Local, NaiveDate, TimeDelta};
use model::{
    progress::{ProgressStats, RecentAttempt, ScoreBand, TopicAccuracy},
    quiz::QuizAttempt,
};
use std::collections::BTreeSet;

/// Estimated study time credited per attempt, in minutes.
const MINUTES_PER_QUIZ: u32 = 10;
const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
}

/// Classifies a topic's accuracy: at least 70% is strong, below 50% is weak,
/// and anything in between carries no label.
pub fn strength(correct: u32, total: u32) -> Option<Strength> {
    if total == 0 {
        return None;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    if correct * 10 >= total * 7 {
        Some(Strength::Strong)
    } else if correct * 2 < total {
        Some(Strength::Weak)
    } else {
        None
    }
}

/// Tallies per-topic correctness over every question of every attempt, in order
/// of first appearance.
pub fn topic_accuracy<'a>(attempts: impl IntoIterator<Item = &'a QuizAttempt>) -> Vec<TopicAccuracy> {
    let mut topics = Vec::<TopicAccuracy>::new();
    for question in attempts.into_iter().flat_map(|attempt| &attempt.questions) {
        let index = match topics.iter().position(|entry| entry.topic == question.topic) {
            Some(index) => index,
            None => {
                topics.push(TopicAccuracy { topic: question.topic.clone(), correct: 0, total: 0 });
                topics.len() - 1
            }
        };
        let entry = &mut topics[index];
        entry.total += 1;
        if question.is_correct() {
            entry.correct += 1;
        }
    }
    topics
}

/// Counts consecutive study days. A streak exists only if `today` or the day
/// before has activity; it then extends backward from the latest active day for
/// as long as consecutive active days are at most one day apart.
pub fn study_streak(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> u32 {
    let dates: BTreeSet<_> = dates.into_iter().collect();
    let yesterday = today - TimeDelta::days(1);
    if !dates.contains(&today) && !dates.contains(&yesterday) {
        return 0;
    }

    let dates: Vec<_> = dates.into_iter().collect();
    let mut streak = 1;
    for pair in dates.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() > 1 {
            break;
        }
        streak += 1;
    }
    streak
}

/// Aggregates attempts (optionally only those of `pdf_name`) as of `today`,
/// bucketing attempt timestamps by the calendar day of `to_date`.
pub fn summarize_with(
    attempts: &[QuizAttempt],
    pdf_name: Option<&str>,
    today: NaiveDate,
    to_date: impl Fn(&QuizAttempt) -> NaiveDate,
) -> ProgressStats {
    let selected: Vec<_> =
        attempts.iter().filter(|attempt| pdf_name.map_or(true, |name| attempt.pdf_name == name)).collect();
    if selected.is_empty() {
        return ProgressStats::default();
    }

    let total_quizzes = selected.len() as u32;
    let total_questions: u32 = selected.iter().map(|attempt| attempt.total_questions).sum();
    let correct_answers: u32 = selected.iter().map(|attempt| attempt.correct_answers).sum();
    let score_sum: u64 = selected.iter().map(|attempt| u64::from(attempt.score)).sum();
    let count = u64::from(total_quizzes);
    let average_score = ((2 * score_sum + count) / (2 * count)) as u8;

    let topics = topic_accuracy(selected.iter().copied());
    let mut strong_topics = Vec::new();
    let mut weak_topics = Vec::new();
    for TopicAccuracy { topic, correct, total } in &topics {
        match strength(*correct, *total) {
            Some(Strength::Strong) => strong_topics.push(topic.clone()),
            Some(Strength::Weak) => weak_topics.push(topic.clone()),
            None => {}
        }
    }

    let recent_attempts = selected
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|&attempt| RecentAttempt { attempt: attempt.clone(), band: ScoreBand::from(attempt.score) })
        .collect();

    ProgressStats {
        total_quizzes,
        average_score,
        total_questions,
        correct_answers,
        topics,
        strong_topics,
        weak_topics,
        study_streak: study_streak(selected.iter().map(|&attempt| to_date(attempt)), today),
        time_spent: total_quizzes * MINUTES_PER_QUIZ,
        recent_attempts,
    }
}

/// Aggregates attempts using the local calendar.
pub fn summarize(attempts: &[QuizAttempt], pdf_name: Option<&str>) -> ProgressStats {
    let today = Local::now().date_naive();
    summarize_with(attempts, pdf_name, today, |attempt| attempt.timestamp.with_timezone(&Local).date_naive())
}
