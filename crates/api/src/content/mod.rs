//! Canned study material. Every generator here is a pure function over ordered
//! keyword tables: the first rule whose keyword occurs in the (lower-cased)
//! input wins, and a fixed default covers everything else.

pub mod chat;
pub mod extract;
pub mod quiz;
pub mod sample;
pub mod video;
pub mod viewer;

/// One row of an ordered dispatch table.
pub struct Rule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub payload: T,
}

impl<T> Rule<T> {
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Yields the payload of every rule that matches, in table order.
pub fn matching<'r, T>(rules: &'r [Rule<T>], haystack: &'r str) -> impl Iterator<Item = &'r T> + 'r {
    rules.iter().filter(move |rule| rule.matches(haystack)).map(|rule| &rule.payload)
}

/// Returns the payload of the first matching rule.
pub fn dispatch<'r, T>(rules: &'r [Rule<T>], haystack: &'r str) -> Option<&'r T> {
    matching(rules, haystack).next()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    ComputerScience,
    Physics,
    Chemistry,
    Biology,
    Mathematics,
    History,
    Literature,
    General,
}

impl Subject {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
            Self::Mathematics => "Mathematics",
            Self::History => "History",
            Self::Literature => "Literature",
            Self::General => "General",
        }
    }
}

/// Removes a trailing `.pdf` extension regardless of case.
pub fn without_extension(name: &str) -> &str {
    const EXT: &str = ".pdf";
    let Some(split) = name.len().checked_sub(EXT.len()) else {
        return name;
    };
    match name.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(EXT) => &name[..split],
        _ => name,
    }
}

/// Human-readable topic of a document: its name minus the extension and the
/// decorative glyphs some sample titles carry.
pub fn document_topic(name: &str) -> String {
    let topic: String = without_extension(name).chars().filter(|c| !matches!(c, '🚀' | '📄' | '📋')).collect();
    String::from(topic.trim())
}
