//! Query term extraction for temporal questions.
//!
//! Splits a question on whitespace and drops the filler words that never
//! appear in the message being asked about.

use std::collections::HashSet;

use super::normalize::normalize;
use super::patterns::strip_when;

/// Words removed from "when" questions before matching
const STOPWORDS_WHEN: &[&str] = &["is", "was", "do", "does", "did", "planning", "plan", "the"];

/// Extracts the terms a message must contain to answer a "when" question
pub struct QueryTermExtractor {
    stopwords: HashSet<&'static str>,
}

impl Default for QueryTermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryTermExtractor {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS_WHEN.iter().copied().collect(),
        }
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Terms of a raw question, in question order
    pub fn extract(&self, question: &str) -> Vec<String> {
        strip_when(&normalize(question))
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty() && !self.is_stopword(word))
            .map(|s| s.to_string())
            .collect()
    }
}
