use super::{dispatch, matching, Rule};

type Answers = &'static [Rule<&'static str>];

/// Document-specific answers, consulted for every document rule that matches.
const DOCUMENT_RULES: &[Rule<Answers>] = &[
    Rule {
        keywords: &["train", "booking"],
        payload: &[
            Rule { keywords: &["database", "table"], payload: include_str!("../../templates/chat/booking_database.md") },
            Rule { keywords: &["api", "endpoint"], payload: include_str!("../../templates/chat/booking_api.md") },
            Rule {
                keywords: &["frontend", "ui", "interface"],
                payload: include_str!("../../templates/chat/booking_frontend.md"),
            },
        ],
    },
    Rule {
        keywords: &["physics", "motion"],
        payload: &[
            Rule {
                keywords: &["motion", "velocity", "acceleration"],
                payload: include_str!("../../templates/chat/physics_motion.md"),
            },
            Rule { keywords: &["force", "newton"], payload: include_str!("../../templates/chat/physics_forces.md") },
        ],
    },
    Rule {
        keywords: &["chemistry", "molecule"],
        payload: &[Rule {
            keywords: &["bond", "molecule"],
            payload: include_str!("../../templates/chat/chemistry_bonds.md"),
        }],
    },
];

const ECHO_KEYWORDS: &[&str] = &["test", "hello"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi"];
const HELP: Rule<&str> =
    Rule { keywords: &["help", "what can you do"], payload: include_str!("../../templates/chat/help.md") };
const DEFAULT: &str = include_str!("../../templates/chat/default.md");
const HELLO_FOOTER: &str = include_str!("../../templates/chat/hello.md");

/// Composes the tutor's reply to `message`. An empty `pdf_name` counts as none.
pub fn reply(message: &str, pdf_name: Option<&str>) -> String {
    let pdf_name = pdf_name.filter(|name| !name.is_empty());
    let lower = message.to_lowercase();

    // Connectivity check that simply echoes the message back
    if ECHO_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        let material = pdf_name.unwrap_or("general study material");
        return format!(
            "Hello! I'm your AI study companion. I received your message: \"{message}\".

I can see you're working with: {material}.

I'm here to help you understand concepts and answer questions about your studies. What would you like to learn about today?"
        );
    }

    let document = pdf_name.map(str::to_lowercase).unwrap_or_default();
    if let Some(answer) = matching(DOCUMENT_RULES, &document).find_map(|answers| dispatch(answers, &lower)) {
        return String::from(*answer);
    }

    if GREETING_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        let context = match pdf_name {
            Some(name) => format!(
                "I can see you're working with \"{name}\". Feel free to ask me anything about the content, concepts, or related topics!"
            ),
            None => String::from("Feel free to ask me any questions about your studies!"),
        };
        return format!(
            "Hello! I'm your AI study companion. I'm here to help you understand concepts from your PDFs and answer any questions you might have.

{context}
{HELLO_FOOTER}"
        );
    }

    if HELP.matches(&lower) {
        return String::from(HELP.payload);
    }

    String::from(DEFAULT)
}
