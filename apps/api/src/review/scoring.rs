use serde::Serialize;

use crate::review::signals::Signals;
use crate::review::skills::ExtractedSkills;
use crate::review::vocabulary::Vocabulary;

pub const MAX_SKILL_SCORE: f64 = 50.0;
pub const PROJECT_SCORE_PRESENT: u32 = 30;
/// Missing project keywords is weak evidence, so it still earns a floor.
pub const PROJECT_SCORE_ABSENT: u32 = 10;
pub const MAX_FORMAT_SCORE: u32 = 20;
const BULLET_BONUS: u32 = 8;

/// Sub-scores and total for one document. Total is out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total: f64,
    pub skill_score: f64,
    pub project_score: u32,
    pub format_score: u32,
}

/// Skills 50 + projects 30 + formatting 20.
pub fn score(vocab: &Vocabulary, skills: &ExtractedSkills, signals: &Signals) -> ScoreBreakdown {
    let skill_score = skill_score(vocab, skills);
    let project_score = project_score(signals.has_projects);
    let format_score = format_score(signals.has_bullets, signals.section_hits);

    ScoreBreakdown {
        total: round1(skill_score + f64::from(project_score) + f64::from(format_score)),
        skill_score,
        project_score,
        format_score,
    }
}

/// Share of required skills present, scaled to 50 and rounded to one decimal.
/// An empty required list scores 0.
pub fn skill_score(vocab: &Vocabulary, skills: &ExtractedSkills) -> f64 {
    let required = vocab.required();
    if required.is_empty() {
        return 0.0;
    }
    let matches = required.iter().filter(|s| skills.contains(s)).count();
    round1(matches as f64 / required.len() as f64 * MAX_SKILL_SCORE)
}

pub fn project_score(has_projects: bool) -> u32 {
    if has_projects {
        PROJECT_SCORE_PRESENT
    } else {
        PROJECT_SCORE_ABSENT
    }
}

/// Step function over bullets and section headers, clamped to 20.
pub fn format_score(has_bullets: bool, section_hits: usize) -> u32 {
    let base = if has_bullets { BULLET_BONUS } else { 0 };
    let section_bonus = match section_hits {
        0 => 2,
        1 => 4,
        2 => 8,
        _ => 12,
    };
    (base + section_bonus).min(MAX_FORMAT_SCORE)
}

/// Rounds to one decimal place from the exact binary value, ties to even.
///
/// Goes through decimal formatting: scaling by 10 first would turn values like
/// 0.35 (stored just below .35) into an exact tie and round them up.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
