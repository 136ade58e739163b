//! Splitting generated analysis text into labeled sections
//!
//! The model is asked to title each part of its answer with one of five fixed
//! labels. Everything after a label, up to the next label or the end of the
//! text, is the body of that section. Text before the first label is dropped.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::ser::{Serialize, Serializer};

/// One of the five recognized output sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    UserStories,
    Epics,
    AmbiguityAnalysis,
    ProblemStatement,
    SuccessCriteria,
}

impl Section {
    /// All sections, in canonical order
    pub const ALL: [Section; 5] = [
        Section::UserStories,
        Section::Epics,
        Section::AmbiguityAnalysis,
        Section::ProblemStatement,
        Section::SuccessCriteria,
    ];

    /// The literal label that opens this section in generated text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserStories => "User Stories:",
            Self::Epics => "Epics:",
            Self::AmbiguityAnalysis => "Ambiguity Analysis:",
            Self::ProblemStatement => "Problem Statement:",
            Self::SuccessCriteria => "Success Criteria:",
        }
    }

    /// The normalized key for this section, e.g. `ambiguity_analysis`.
    ///
    /// Always equal to `section_key(self.label())`; the table is spelled out
    /// so keys can be borrowed for `'static`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::UserStories => "user_stories",
            Self::Epics => "epics",
            Self::AmbiguityAnalysis => "ambiguity_analysis",
            Self::ProblemStatement => "problem_statement",
            Self::SuccessCriteria => "success_criteria",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive a section key from a label: drop the trailing colon, lower-case,
/// and replace spaces with underscores.
pub fn section_key(label: &str) -> String {
    label
        .strip_suffix(':')
        .unwrap_or(label)
        .to_lowercase()
        .replace(' ', "_")
}

/// Whitespace as the model output is trimmed: Unicode white space plus the
/// ASCII information separators U+001C..=U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Alternation of every label, compiled once.
static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = Section::ALL
        .iter()
        .map(|s| regex::escape(s.label()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("({alternation})")).expect("section label pattern is a valid regex")
});

/// Sections found in one block of generated text.
///
/// Keys appear in the order their label was first seen. A section whose label
/// never appeared is absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAnalysis {
    sections: IndexMap<Section, String>,
}

impl ParsedAnalysis {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Look up a body by its normalized key (`user_stories`, `epics`, ...).
    pub fn get_key(&self, key: &str) -> Option<&str> {
        Section::from_key(key).and_then(|s| self.get(s))
    }

    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over found sections in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.sections.iter().map(|(s, body)| (*s, body.as_str()))
    }

    /// Sections that did not appear at all, in canonical order.
    pub fn missing(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| !self.contains(*s))
            .collect()
    }
}

impl Serialize for ParsedAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sections.iter().map(|(s, body)| (s.key(), body)))
    }
}

/// Split `text` on every label occurrence, keeping the labels as tokens.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in LABEL_PATTERN.find_iter(text) {
        tokens.push(&text[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&text[last..]);

    tokens
}

/// Parse generated text into its labeled sections.
///
/// Never fails. Text without any label yields an empty result. When a label
/// repeats, only the body after its last occurrence is kept.
pub fn parse_sections(text: &str) -> ParsedAnalysis {
    let mut bodies: IndexMap<Section, Vec<&str>> = IndexMap::new();
    let mut current: Option<Section> = None;

    for token in tokenize(text) {
        let token = token.trim_matches(is_blank);

        if let Some(section) = Section::from_label(token) {
            // Re-inserting keeps the first-seen position but drops the old body.
            bodies.insert(section, Vec::new());
            current = Some(section);
        } else if let Some(section) = current {
            bodies.entry(section).or_default().push(token);
        }
    }

    let sections = bodies
        .into_iter()
        .map(|(section, parts)| {
            let body = parts.join("\n");
            (section, body.trim_matches(is_blank).to_string())
        })
        .collect();

    ParsedAnalysis { sections }
}
