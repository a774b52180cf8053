//! Text heuristics shared by scoring and suggestions.
//!
//! Each detector is a pure function of the text. `Signals::detect` runs all of
//! them with a single lowercase pass so both consumers see the same values.

use serde::Serialize;

use crate::review::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub has_projects: bool,
    pub has_bullets: bool,
    /// Number of known section headers present, 0..=5 with the default list.
    pub section_hits: usize,
    pub word_count: usize,
}

impl Signals {
    pub fn detect(vocab: &Vocabulary, text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self {
            has_projects: projects_in_lowered(vocab, &lowered),
            has_bullets: has_bullets(vocab, text),
            section_hits: sections_in_lowered(vocab, &lowered),
            word_count: word_count(text),
        }
    }
}

/// True if any project-indicating keyword appears in the text.
// Standalone form of the check `Signals::detect` runs; the service only calls detect.
#[allow(dead_code)]
pub fn has_projects(vocab: &Vocabulary, text: &str) -> bool {
    projects_in_lowered(vocab, &text.to_lowercase())
}

/// True if the raw text contains any bullet character.
pub fn has_bullets(vocab: &Vocabulary, text: &str) -> bool {
    text.contains(vocab.bullet_chars())
}

/// Counts how many section names appear in the text.
#[allow(dead_code)]
pub fn section_hits(vocab: &Vocabulary, text: &str) -> usize {
    sections_in_lowered(vocab, &text.to_lowercase())
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn projects_in_lowered(vocab: &Vocabulary, lowered: &str) -> bool {
    vocab
        .project_keywords()
        .iter()
        .any(|kw| lowered.contains(kw.as_str()))
}

fn sections_in_lowered(vocab: &Vocabulary, lowered: &str) -> usize {
    vocab
        .section_names()
        .iter()
        .filter(|name| lowered.contains(name.as_str()))
        .count()
}
