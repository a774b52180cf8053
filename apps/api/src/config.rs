use anyhow::{Context, Result};

use crate::review::vocabulary::{Vocabulary, DEFAULT_KNOWN_SKILLS};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Overrides the default required-skill list when set.
    pub required_skills: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            required_skills: std::env::var("REQUIRED_SKILLS")
                .ok()
                .map(|v| parse_skill_list(&v)),
        })
    }

    /// Default vocabulary, with the required list swapped in when
    /// `REQUIRED_SKILLS` is set. An empty override clears the required list.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.required_skills {
            Some(required) => Vocabulary::new(DEFAULT_KNOWN_SKILLS, required.as_slice())
                .context("REQUIRED_SKILLS contains an unknown skill"),
            None => Ok(Vocabulary::default()),
        }
    }
}

/// Splits a comma-separated list, dropping blank entries.
fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::engine::ReviewEngine;

    fn config_with_required(raw: Option<&str>) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            required_skills: raw.map(parse_skill_list),
        }
    }

    #[test]
    fn test_vocabulary_defaults_without_override() {
        let vocab = config_with_required(None).vocabulary().unwrap();
        assert_eq!(vocab.required(), Vocabulary::default().required());
    }

    #[test]
    fn test_vocabulary_override_replaces_required() {
        let vocab = config_with_required(Some("Docker, aws"))
            .vocabulary()
            .unwrap();
        assert_eq!(vocab.required(), ["docker", "aws"]);
        assert_eq!(vocab.known().len(), DEFAULT_KNOWN_SKILLS.len());
    }

    #[test]
    fn test_vocabulary_override_rejects_unknown_skill() {
        let err = config_with_required(Some("python, cobol"))
            .vocabulary()
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("REQUIRED_SKILLS contains an unknown skill"), "{message}");
        assert!(message.contains("cobol"), "{message}");
    }

    #[test]
    fn test_empty_override_clears_required_and_skill_score() {
        let vocab = config_with_required(Some("")).vocabulary().unwrap();
        assert!(vocab.required().is_empty());

        let report = ReviewEngine::new(vocab).evaluate("Python, SQL, Git and GitHub");
        assert_eq!(report.skill_score, 0.0);
        assert!(report.missing_skills.is_empty());
        assert!(!report.skills.is_empty());
    }

    #[test]
    fn test_parse_skill_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_skill_list(" python, machine learning ,,sql "),
            ["python", "machine learning", "sql"]
        );
    }

    #[test]
    fn test_parse_skill_list_empty() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ").is_empty());
    }
}
