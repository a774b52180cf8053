//! Skill vocabulary and the other keyword lists the heuristics read.
//!
//! Built once at startup and shared read-only by every review.

use thiserror::Error;

pub const DEFAULT_KNOWN_SKILLS: &[&str] = &[
    "python",
    "java",
    "c",
    "c++",
    "html",
    "css",
    "javascript",
    "react",
    "node",
    "node.js",
    "flask",
    "django",
    "sql",
    "mysql",
    "postgres",
    "mongodb",
    "machine learning",
    "ml",
    "deep learning",
    "data analysis",
    "data analytics",
    "pandas",
    "numpy",
    "scikit-learn",
    "git",
    "github",
    "aws",
    "azure",
    "gcp",
    "cloud",
    "docker",
    "kubernetes",
];

/// Skills considered essential for an entry-level AI / web / software profile.
pub const DEFAULT_REQUIRED_SKILLS: &[&str] = &[
    "python",
    "html",
    "css",
    "javascript",
    "sql",
    "git",
    "github",
    "machine learning",
];

pub const DEFAULT_PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "projects",
    "built",
    "created",
    "developed",
    "designed",
    "implemented",
    "engineered",
    "deployed",
    "application",
    "app",
    "system",
    "model",
];

pub const DEFAULT_SECTION_NAMES: &[&str] =
    &["education", "experience", "skills", "projects", "achievements"];

pub const DEFAULT_BULLET_CHARS: &[char] = &['•', '-', '*'];

#[derive(Debug, Error, PartialEq)]
pub enum VocabularyError {
    #[error("required skill '{0}' is not in the known skill list")]
    UnknownRequired(String),
}

/// Reference data for one review profile.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    known: Vec<String>,
    required: Vec<String>,
    project_keywords: Vec<String>,
    section_names: Vec<String>,
    bullet_chars: Vec<char>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            known: normalize_terms(DEFAULT_KNOWN_SKILLS),
            required: normalize_terms(DEFAULT_REQUIRED_SKILLS),
            project_keywords: normalize_terms(DEFAULT_PROJECT_KEYWORDS),
            section_names: normalize_terms(DEFAULT_SECTION_NAMES),
            bullet_chars: DEFAULT_BULLET_CHARS.to_vec(),
        }
    }
}

impl Vocabulary {
    /// Builds a vocabulary with custom skill lists and the default project,
    /// section and bullet lists. Every required skill must also be known.
    pub fn new<K, R>(known: &[K], required: &[R]) -> Result<Self, VocabularyError>
    where
        K: AsRef<str>,
        R: AsRef<str>,
    {
        let known = normalize_terms(known);
        let required = normalize_terms(required);
        if let Some(unknown) = required.iter().find(|r| !known.contains(r)) {
            return Err(VocabularyError::UnknownRequired(unknown.clone()));
        }
        Ok(Self {
            known,
            required,
            ..Self::default()
        })
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn project_keywords(&self) -> &[String] {
        &self.project_keywords
    }

    pub fn section_names(&self) -> &[String] {
        &self.section_names
    }

    pub fn bullet_chars(&self) -> &[char] {
        &self.bullet_chars
    }
}

/// Lowercases and trims terms, dropping blanks and repeats while keeping
/// first-seen order.
fn normalize_terms<T: AsRef<str>>(terms: &[T]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}
