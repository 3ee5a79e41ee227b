use super::{dispatch, document_topic, sample, Rule, Subject};
use model::wire::Extraction;

const UPLOAD_RULES: &[Rule<(Subject, &str)>] = &[
    Rule {
        keywords: &["train", "booking", "system"],
        payload: (Subject::ComputerScience, include_str!("../../templates/extract/computer_science.md")),
    },
    Rule {
        keywords: &["physics", "motion", "energy"],
        payload: (Subject::Physics, include_str!("../../templates/extract/physics.md")),
    },
    Rule {
        keywords: &["chemistry", "molecule", "reaction"],
        payload: (Subject::Chemistry, include_str!("../../templates/extract/chemistry.md")),
    },
];

/// Whether the `pdfFile` marker of a request denotes a user upload.
pub fn is_upload_marker(marker: Option<&str>) -> bool {
    marker.is_some_and(|marker| !marker.is_empty() && marker != "sample")
}

/// Text of an uploaded document, inferred from its name.
pub fn uploaded_text(name: &str) -> (Subject, String) {
    let lower = name.to_lowercase();
    if let Some(&(subject, text)) = dispatch(UPLOAD_RULES, &lower) {
        return (subject, String::from(text));
    }

    let topic = document_topic(name);
    let text = format!(
        "Document Content Analysis

This document appears to cover topics related to: {topic}

The content likely includes:
- Theoretical concepts and principles
- Practical applications and examples
- Problem-solving methodologies
- Case studies and analysis
- Implementation strategies
- Best practices and guidelines

Key topics covered:
- Fundamental concepts
- Advanced applications
- Real-world examples
- Technical specifications
- Implementation details
- Performance considerations

This document provides comprehensive coverage of the subject matter with detailed explanations, examples, and practical applications.
"
    );
    (Subject::General, text)
}

/// Text of a bundled sample, or a placeholder for names outside the catalog.
pub fn sample_text(name: &str) -> (Option<Subject>, String) {
    match sample::find(name) {
        Some(sample) => (Some(sample.subject), String::from(sample.text)),
        None => (
            None,
            format!(
                "This is sample text extracted from {name}. In a real implementation,
this would be the actual text content extracted from the PDF using libraries like pdf-parse.
The text would then be processed to generate relevant quiz questions.
"
            ),
        ),
    }
}

/// Produces the mock extraction payload for a document.
pub fn extract(name: &str, marker: Option<&str>) -> Extraction {
    let is_uploaded = is_upload_marker(marker);
    let (subject, text) = if is_uploaded {
        let (subject, text) = uploaded_text(name);
        (Some(subject), text)
    } else {
        sample_text(name)
    };
    Extraction { text, pdf_name: String::from(name), is_uploaded, subject: subject.map(|s| String::from(s.name())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_subject_regardless_of_case() {
        let out = extract("My PHYSICS Notes.pdf", Some("uploaded"));
        assert!(out.is_uploaded);
        assert_eq!(out.subject.as_deref(), Some("Physics"));
        assert!(out.text.starts_with("Physics Concepts and Principles"));
    }

    #[test]
    fn booking_rule_precedes_physics() {
        let out = extract("booking-energy.pdf", Some("uploaded"));
        assert_eq!(out.subject.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn unknown_uploads_describe_their_title() {
        let out = extract("📄 Roman Law.pdf", Some("uploaded"));
        assert_eq!(out.subject.as_deref(), Some("General"));
        assert!(out.text.contains("topics related to: Roman Law\n"));
    }

    #[test]
    fn samples_come_from_the_catalog() {
        let out = extract("Physics Part 2 - Work, Energy and Power", Some("sample"));
        assert!(!out.is_uploaded);
        assert_eq!(out.subject.as_deref(), Some("Physics"));
        assert!(out.text.contains("Work-energy theorem"));

        let out = extract("Mystery", None);
        assert!(!out.is_uploaded);
        assert!(out.subject.is_none());
        assert!(out.text.starts_with("This is sample text extracted from Mystery."));
    }

    #[test]
    fn recognizes_upload_markers() {
        assert!(is_upload_marker(Some("uploaded")));
        assert!(is_upload_marker(Some("data:application/pdf;base64,AAAA")));
        assert!(!is_upload_marker(Some("sample")));
        assert!(!is_upload_marker(Some("")));
        assert!(!is_upload_marker(None));
    }
}
