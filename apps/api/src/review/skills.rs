use std::collections::BTreeSet;

use serde::Serialize;

use crate::review::vocabulary::Vocabulary;

/// Known skills found in one document. Iterates in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExtractedSkills(BTreeSet<String>);

impl ExtractedSkills {
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

/// Finds every known skill that appears in the text.
///
/// Matching is plain substring containment on the lowercased text, so
/// "java" also matches inside "javascript".
pub fn extract_skills(vocab: &Vocabulary, text: &str) -> ExtractedSkills {
    let lowered = text.to_lowercase();
    ExtractedSkills(
        vocab
            .known()
            .iter()
            .filter(|skill| lowered.contains(skill.as_str()))
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_skills() {
        let skills = extract_skills(&Vocabulary::default(), "");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let vocab = Vocabulary::new(&["python", "docker"], &["python"]).unwrap();
        let skills = extract_skills(&vocab, "Shipped PYTHON services in Docker");
        assert_eq!(skills.to_sorted_vec(), ["docker", "python"]);
    }

    #[test]
    fn test_substring_match_is_not_token_aware() {
        let vocab = Vocabulary::new(&["java", "javascript"], &[] as &[&str]).unwrap();
        let skills = extract_skills(&vocab, "Frontend work in JavaScript");
        assert!(skills.contains("java"));
        assert!(skills.contains("javascript"));
    }

    #[test]
    fn test_output_is_lexicographic() {
        let skills = extract_skills(
            &Vocabulary::default(),
            "kubernetes, python, aws and git",
        );
        let out = skills.to_sorted_vec();
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(out, sorted);
        assert!(out.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_result_is_subset_of_known() {
        let vocab = Vocabulary::default();
        let samples = [
            "",
            "Node.js and React developer, C++ hobbyist",
            "Data analytics with pandas, numpy and scikit-learn on GCP",
            "完全に無関係なテキスト",
        ];
        for text in samples {
            for skill in extract_skills(&vocab, text).to_sorted_vec() {
                assert!(vocab.known().contains(&skill), "{skill}");
            }
        }
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let vocab = Vocabulary::new(&["sql", "css"], &[] as &[&str]).unwrap();
        let skills = extract_skills(&vocab, "SQL and CSS");
        assert_eq!(
            serde_json::to_value(&skills).unwrap(),
            serde_json::json!(["css", "sql"])
        );
    }
}
