//! Review engine: runs extraction and signal detection once per document and
//! feeds the same values to scoring and suggestions.

use serde::Serialize;
use tracing::debug;

use crate::review::scoring::{score, ScoreBreakdown};
use crate::review::signals::Signals;
use crate::review::skills::extract_skills;
use crate::review::suggestions::{suggest, SuggestionReport};
use crate::review::vocabulary::Vocabulary;

/// Everything a caller needs to present one review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewReport {
    pub total: f64,
    pub skill_score: f64,
    pub project_score: u32,
    pub format_score: u32,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub signals: Signals,
}

/// Stateless evaluator over an injected vocabulary. Safe to share across
/// requests behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ReviewEngine {
    vocab: Vocabulary,
}

impl ReviewEngine {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Scores already-extracted resume text. Callers reject blank input first.
    pub fn evaluate(&self, text: &str) -> ReviewReport {
        let skills = extract_skills(&self.vocab, text);
        let signals = Signals::detect(&self.vocab, text);

        debug!(
            skills = skills.len(),
            has_projects = signals.has_projects,
            has_bullets = signals.has_bullets,
            section_hits = signals.section_hits,
            word_count = signals.word_count,
            "Signals detected"
        );

        let ScoreBreakdown {
            total,
            skill_score,
            project_score,
            format_score,
        } = score(&self.vocab, &skills, &signals);
        let SuggestionReport {
            suggestions,
            missing_skills,
        } = suggest(&self.vocab, &skills, &signals);

        ReviewReport {
            total,
            skill_score,
            project_score,
            format_score,
            skills: skills.to_sorted_vec(),
            missing_skills,
            suggestions,
            signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::suggestions::{
        ADD_PROJECTS, LOOKS_GOOD, MISSING_SKILLS_PREFIX, NO_SKILLS, TOO_LONG, TOO_SHORT,
        USE_BULLETS,
    };

    const STRONG_RESUME: &str = "Python, HTML, CSS, JavaScript, SQL, Git, GitHub, \
        Machine Learning, Projects: built a web app using React, • bullet list, \
        Education Experience Skills Projects Achievements";

    fn padded(text: &str, extra_words: usize) -> String {
        let mut out = text.to_string();
        for _ in 0..extra_words {
            out.push_str(" lorem");
        }
        out
    }

    #[test]
    fn test_empty_text_scenario() {
        let engine = ReviewEngine::default();
        let report = engine.evaluate("");

        assert!(report.skills.is_empty());
        assert_eq!(report.missing_skills, engine.vocabulary().required());
        assert_eq!(report.project_score, 10);
        assert_eq!(report.format_score, 2);
        assert_eq!(report.skill_score, 0.0);
        assert_eq!(report.total, 12.0);

        assert_eq!(report.suggestions.len(), 5);
        assert!(report.suggestions[0].starts_with(MISSING_SKILLS_PREFIX));
        assert_eq!(
            report.suggestions[1..],
            [ADD_PROJECTS, TOO_SHORT, NO_SKILLS, USE_BULLETS]
        );
        assert!(!report.suggestions.iter().any(|s| s == LOOKS_GOOD));
    }

    #[test]
    fn test_strong_resume_scores_full_marks() {
        let engine = ReviewEngine::default();
        let text = padded(STRONG_RESUME, 150);
        let report = engine.evaluate(&text);

        assert!(report.signals.word_count >= 150);
        assert_eq!(report.skill_score, 50.0);
        assert_eq!(report.project_score, 30);
        assert_eq!(report.format_score, 20);
        assert_eq!(report.total, 100.0);
        assert_eq!(report.suggestions, [LOOKS_GOOD]);
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_skills_are_sorted_and_known() {
        let engine = ReviewEngine::default();
        let report = engine.evaluate(STRONG_RESUME);

        let mut sorted = report.skills.clone();
        sorted.sort();
        assert_eq!(report.skills, sorted);
        for skill in &report.skills {
            assert!(engine.vocabulary().known().contains(skill));
        }
        // "java" rides along inside "javascript"
        assert!(report.skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_word_count_boundaries() {
        let engine = ReviewEngine::default();
        let body = STRONG_RESUME;
        let base_words = body.split_whitespace().count();

        let exactly_150 = engine.evaluate(&padded(body, 150 - base_words));
        assert_eq!(exactly_150.signals.word_count, 150);
        assert!(!exactly_150.suggestions.iter().any(|s| s == TOO_SHORT));

        let exactly_700 = engine.evaluate(&padded(body, 700 - base_words));
        assert_eq!(exactly_700.signals.word_count, 700);
        assert!(!exactly_700.suggestions.iter().any(|s| s == TOO_LONG));

        let over_700 = engine.evaluate(&padded(body, 701 - base_words));
        assert_eq!(over_700.suggestions, [TOO_LONG]);
    }

    #[test]
    fn test_scoring_and_suggestions_agree_on_signals() {
        let engine = ReviewEngine::default();
        let report = engine.evaluate("Worked as a cashier. Education: high school.");

        assert_eq!(report.signals.has_projects, report.project_score == 30);
        assert_eq!(
            report.signals.has_projects,
            !report.suggestions.iter().any(|s| s == ADD_PROJECTS)
        );
        assert_eq!(
            report.signals.has_bullets,
            !report.suggestions.iter().any(|s| s == USE_BULLETS)
        );
    }

    #[test]
    fn test_custom_vocabulary_is_used() {
        let vocab = Vocabulary::new(&["rust", "tokio"], &["rust", "tokio"]).unwrap();
        let engine = ReviewEngine::new(vocab);
        let report = engine.evaluate("Rust services on Tokio");

        assert_eq!(report.skills, ["rust", "tokio"]);
        assert_eq!(report.skill_score, 50.0);
        assert!(report.missing_skills.is_empty());
    }
}
