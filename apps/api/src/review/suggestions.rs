use serde::Serialize;

use crate::review::signals::Signals;
use crate::review::skills::ExtractedSkills;
use crate::review::vocabulary::Vocabulary;

pub const MIN_WORDS: usize = 150;
pub const MAX_WORDS: usize = 700;

pub const MISSING_SKILLS_PREFIX: &str =
    "Try to add or highlight these important skills if you know them: ";
pub const ADD_PROJECTS: &str = "Add a 'Projects' section with 2–3 good projects. \
    Mention what you built, tools/technologies used, and your role.";
pub const TOO_SHORT: &str = "Your resume looks quite short. \
    Add more details about your skills, projects, and achievements.";
pub const TOO_LONG: &str = "Your resume seems long. \
    For a fresher, try to keep it to 1 page with the most important points.";
pub const NO_SKILLS: &str = "I could not find a clear 'Skills' section. \
    Add one and list your tools, languages, and frameworks.";
pub const USE_BULLETS: &str = "Use bullet points to list skills, projects, and experience \
    instead of big paragraphs. This makes the resume easier to read.";
pub const LOOKS_GOOD: &str = "Your resume looks good! \
    You can still refine wording and customize it for each job description.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub suggestions: Vec<String>,
    /// Required skills not found, in vocabulary order.
    pub missing_skills: Vec<String>,
}

/// Builds suggestions, most actionable first. The "looks good" message is
/// added only when nothing else applies.
pub fn suggest(vocab: &Vocabulary, skills: &ExtractedSkills, signals: &Signals) -> SuggestionReport {
    let missing_skills = missing_required(vocab, skills);
    let mut suggestions = Vec::new();

    if !missing_skills.is_empty() {
        suggestions.push(format!("{MISSING_SKILLS_PREFIX}{}", missing_skills.join(", ")));
    }

    if !signals.has_projects {
        suggestions.push(ADD_PROJECTS.to_string());
    }

    if signals.word_count < MIN_WORDS {
        suggestions.push(TOO_SHORT.to_string());
    }
    if signals.word_count > MAX_WORDS {
        suggestions.push(TOO_LONG.to_string());
    }

    if skills.is_empty() {
        suggestions.push(NO_SKILLS.to_string());
    }

    if !signals.has_bullets {
        suggestions.push(USE_BULLETS.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(LOOKS_GOOD.to_string());
    }

    SuggestionReport {
        suggestions,
        missing_skills,
    }
}

/// Required skills absent from `skills`, in vocabulary order.
pub fn missing_required(vocab: &Vocabulary, skills: &ExtractedSkills) -> Vec<String> {
    vocab
        .required()
        .iter()
        .filter(|s| !skills.contains(s))
        .cloned()
        .collect()
}
