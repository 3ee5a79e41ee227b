use crate::error::{Error, Result};
use model::{
    quiz::{AttemptQuestion, QuizAttempt, QuizQuestion},
    Timestamp,
};
use std::collections::HashMap;

/// Outcome of grading one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grade {
    pub correct: u32,
    pub total: u32,
    /// Percentage in `0..=100`.
    pub score: u8,
}

/// Computes `round(100 * correct / total)` with halves rounded up.
pub fn percentage(correct: u32, total: u32) -> u8 {
    debug_assert!(total > 0 && correct <= total);
    let (correct, total) = (u64::from(correct), u64::from(total));
    let rounded = (200 * correct + total) / (2 * total);
    // At most 100 because `correct <= total`.
    rounded as u8
}

/// Grades `answers` (question ID to answer) by exact string equality.
pub fn grade(questions: &[QuizQuestion], answers: &HashMap<String, String>) -> Result<Grade> {
    let total = u32::try_from(questions.len()).map_err(|_| Error::InvalidParams)?;
    if total == 0 {
        return Err(Error::NoQuestions);
    }

    let correct = questions
        .iter()
        .filter(|question| answers.get(&question.id).is_some_and(|answer| *answer == question.correct_answer))
        .count();
    let correct = correct as u32;
    Ok(Grade { correct, total, score: percentage(correct, total) })
}

/// Grades a submission and records it as a new attempt.
pub fn submit(
    id: String,
    pdf_name: String,
    questions: &[QuizQuestion],
    answers: &HashMap<String, String>,
    timestamp: Timestamp,
) -> Result<QuizAttempt> {
    let Grade { correct, total, score } = grade(questions, answers)?;

    let mut topics = Vec::<String>::new();
    for question in questions {
        if !topics.contains(&question.topic) {
            topics.push(question.topic.clone());
        }
    }

    let questions = questions
        .iter()
        .map(|question| AttemptQuestion {
            id: question.id.clone(),
            question: question.question.clone(),
            user_answer: answers.get(&question.id).cloned(),
            correct_answer: question.correct_answer.clone(),
            topic: question.topic.clone(),
            difficulty: question.difficulty,
        })
        .collect();

    Ok(QuizAttempt {
        id,
        pdf_name,
        score,
        total_questions: total,
        correct_answers: correct,
        timestamp,
        topics,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::quiz::{Difficulty, QuestionKind};

    fn question(id: &str, answer: &str, topic: &str) -> QuizQuestion {
        QuizQuestion {
            id: String::from(id),
            kind: QuestionKind::Mcq,
            question: format!("Question {id}?"),
            options: Some(Vec::from([String::from(answer), String::from("Other")])),
            correct_answer: String::from(answer),
            explanation: String::new(),
            difficulty: Difficulty::Easy,
            topic: String::from(topic),
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|&(id, answer)| (String::from(id), String::from(answer))).collect()
    }

    #[test]
    fn perfect_submission() {
        let questions = [question("1", "Newton", "Forces"), question("2", "Velocity", "Motion")];
        let grade = grade(&questions, &answers(&[("1", "Newton"), ("2", "Velocity")])).unwrap();
        assert_eq!(grade, Grade { correct: 2, total: 2, score: 100 });
    }

    #[test]
    fn exact_match_only() {
        let questions = [question("1", "Newton", "Forces"), question("2", "Velocity", "Motion")];
        let grade = grade(&questions, &answers(&[("1", "newton"), ("2", "Velocity ")])).unwrap();
        assert_eq!(grade, Grade { correct: 0, total: 2, score: 0 });
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 200), 1);
        assert_eq!(percentage(0, 7), 0);
        assert_eq!(percentage(7, 7), 100);
        for total in 1..=50 {
            for correct in 0..=total {
                let expected = (100.0 * f64::from(correct) / f64::from(total)).round() as u8;
                assert_eq!(percentage(correct, total), expected);
            }
        }
    }

    #[test]
    fn rejects_empty_quiz() {
        assert!(matches!(grade(&[], &HashMap::new()), Err(Error::NoQuestions)));
    }

    #[test]
    fn records_attempt() {
        let questions = [
            question("1", "Newton", "Forces"),
            question("2", "Velocity", "Motion"),
            question("3", "Joule", "Forces"),
        ];
        let now = Timestamp::default();
        let attempt =
            submit(String::from("42"), String::from("physics.pdf"), &questions, &answers(&[("2", "Velocity")]), now)
                .unwrap();
        assert_eq!(attempt.score, 33);
        assert_eq!(attempt.correct_answers, 1);
        assert_eq!(attempt.total_questions, 3);
        assert_eq!(attempt.topics, ["Forces", "Motion"]);
        assert!(attempt.questions[0].user_answer.is_none());
        assert!(attempt.questions[1].is_correct());
        assert_eq!(attempt.timestamp, now);
    }
}
