use super::{dispatch, without_extension, Rule, Subject};
use model::quiz::{Difficulty, QuestionKind, QuizQuestion};

const SUBJECT_RULES: &[Rule<(Subject, &[&str])>] = &[
    Rule {
        keywords: &["physics", "motion", "energy"],
        payload: (Subject::Physics, &["motion", "energy", "force", "velocity", "acceleration", "work", "power"]),
    },
    Rule {
        keywords: &["chemistry", "molecule", "reaction"],
        payload: (Subject::Chemistry, &["molecules", "reactions", "elements", "compounds", "atoms"]),
    },
    Rule {
        keywords: &["biology", "cell", "organism"],
        payload: (Subject::Biology, &["cells", "organisms", "evolution", "genetics", "ecosystem"]),
    },
    Rule {
        keywords: &["math", "algebra", "calculus"],
        payload: (Subject::Mathematics, &["equations", "functions", "calculus", "algebra", "geometry"]),
    },
    Rule {
        keywords: &["train", "booking", "system"],
        payload: (
            Subject::ComputerScience,
            &["booking system", "database", "user interface", "reservation", "ticketing"],
        ),
    },
    Rule {
        keywords: &["history", "ancient", "war"],
        payload: (Subject::History, &["historical events", "civilizations", "wars", "revolutions", "timeline"]),
    },
    Rule {
        keywords: &["literature", "novel", "poetry"],
        payload: (Subject::Literature, &["characters", "themes", "plot", "literary devices", "analysis"]),
    },
];

const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "they", "have", "been", "were", "said", "each", "which", "their", "would",
    "there", "could", "other", "after", "first", "well", "also", "where", "much", "some", "time", "very", "when",
    "come", "here", "just", "like", "long", "make", "many", "over", "such", "take", "than", "them", "these", "think",
    "want", "will", "into", "more", "your", "work", "know", "only", "right", "should", "through", "water", "about",
    "again", "being", "before", "does", "during", "every", "great", "might", "never", "place", "since", "still",
    "those", "under", "while", "world",
];

/// How many words of the source text may seed the concept question.
const TEXT_KEYWORD_LIMIT: usize = 5;

/// Infers the subject of a document and its canned topic keywords from its name.
pub fn classify(pdf_name: &str) -> (Subject, &'static [&'static str]) {
    let lower = pdf_name.to_lowercase();
    dispatch(SUBJECT_RULES, &lower).copied().unwrap_or((Subject::General, &[]))
}

/// Picks the first few distinctive words of `text`: longer than four characters
/// and not a stop word. Punctuation stays attached to the word.
pub fn text_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 4 && !STOP_WORDS.contains(word))
        .take(TEXT_KEYWORD_LIMIT)
        .map(String::from)
        .collect()
}

/// Builds the four template questions for a document.
pub fn generate(text: &str, pdf_name: &str) -> Vec<QuizQuestion> {
    let (subject, topic_keywords) = classify(pdf_name);
    let subject = subject.name();

    let mut keywords: Vec<String> = topic_keywords.iter().copied().map(String::from).collect();
    keywords.extend(text_keywords(text));
    let keyword = |index: usize, fallback: &str| keywords.get(index).cloned().unwrap_or_else(|| String::from(fallback));
    let concept = keyword(0, "General concepts");

    let about = without_extension(pdf_name).to_lowercase();
    let topic = String::from(subject);

    Vec::from([
        QuizQuestion {
            id: String::from("1"),
            kind: QuestionKind::Mcq,
            question: format!("What is the primary subject/topic covered in \"{pdf_name}\"?"),
            options: Some(Vec::from([
                String::from(subject),
                String::from("General Science"),
                String::from("Mathematics"),
                String::from("Literature"),
            ])),
            correct_answer: String::from(subject),
            explanation: format!("The PDF \"{pdf_name}\" primarily covers {subject} concepts and topics."),
            difficulty: Difficulty::Easy,
            topic: topic.clone(),
        },
        QuizQuestion {
            id: String::from("2"),
            kind: QuestionKind::Mcq,
            question: format!("Which of the following concepts is most likely discussed in \"{pdf_name}\"?"),
            options: Some(Vec::from([
                concept.clone(),
                keyword(1, "Basic principles"),
                keyword(2, "Fundamental ideas"),
                String::from("Advanced theories"),
            ])),
            explanation: format!(
                "The PDF likely discusses {} based on its title and content.",
                keywords.first().map_or("general concepts", String::as_str)
            ),
            correct_answer: concept,
            difficulty: Difficulty::Medium,
            topic: topic.clone(),
        },
        QuizQuestion {
            id: String::from("3"),
            kind: QuestionKind::Saq,
            question: format!("Based on the title \"{pdf_name}\", explain what this document is likely about."),
            options: None,
            correct_answer: format!(
                "This document appears to be about {about}, covering related concepts and principles."
            ),
            explanation: format!("The document title suggests it covers topics related to {about}."),
            difficulty: Difficulty::Medium,
            topic: topic.clone(),
        },
        QuizQuestion {
            id: String::from("4"),
            kind: QuestionKind::Laq,
            question: format!("Describe how the concepts from \"{pdf_name}\" might be applied in real-world scenarios."),
            options: None,
            correct_answer: format!(
                "The concepts from {pdf_name} can be applied in various real-world situations depending on the specific subject matter, such as practical applications, problem-solving, and theoretical understanding."
            ),
            explanation: format!(
                "The practical applications would depend on the specific content of {pdf_name}, but generally involve applying theoretical knowledge to solve real problems."
            ),
            difficulty: Difficulty::Hard,
            topic,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_first_matching_subject() {
        assert_eq!(classify("Cell Biology.pdf").0, Subject::Biology);
        assert_eq!(classify("CALCULUS II").0, Subject::Mathematics);
        assert_eq!(classify("Ancient Rome").0, Subject::History);
        assert_eq!(classify("Poetry Anthology").0, Subject::Literature);
        assert_eq!(classify("Booking System").0, Subject::ComputerScience);
        // Physics precedes the booking rule in this table.
        assert_eq!(classify("energy booking").0, Subject::Physics);
        assert_eq!(classify("Untitled"), (Subject::General, &[][..]));
    }

    #[test]
    fn extracts_distinctive_words() {
        let words = text_keywords("Velocity is the RATE of change; which equals displacement over elapsed time.");
        assert_eq!(words, ["velocity", "change;", "equals", "displacement", "elapsed"]);
        assert!(text_keywords("tiny bits only").is_empty());
    }

    #[test]
    fn generates_four_questions_tagged_with_subject() {
        let questions = generate("Momentum is conserved.", "Physics Notes.PDF");
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| q.topic == "Physics"));
        assert_eq!(
            questions.iter().map(|q| q.kind).collect::<Vec<_>>(),
            [QuestionKind::Mcq, QuestionKind::Mcq, QuestionKind::Saq, QuestionKind::Laq]
        );
        assert_eq!(questions[0].correct_answer, "Physics");
        assert_eq!(questions[1].correct_answer, "motion");
        assert_eq!(
            questions[2].correct_answer,
            "This document appears to be about physics notes, covering related concepts and principles."
        );
        assert!(questions.iter().all(|q| q.options.is_some() == (q.kind == QuestionKind::Mcq)));
    }

    #[test]
    fn falls_back_when_nothing_is_known() {
        let questions = generate("a b c", "Untitled");
        assert_eq!(questions[0].correct_answer, "General");
        assert_eq!(questions[1].correct_answer, "General concepts");
        assert_eq!(
            questions[1].options.as_deref().unwrap(),
            ["General concepts", "Basic principles", "Fundamental ideas", "Advanced theories"]
        );
        assert!(questions[1].explanation.contains("discusses general concepts based"));
    }
}
