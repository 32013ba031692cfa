//! Extraction outcome types.

use serde::Serialize;
use std::fmt;

use super::intent::Intent;

/// Fallback sentence for every question the pipeline cannot answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't infer an answer from the member data.";

/// Why an extractor produced nothing. Logged only, never shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatch {
    /// No capitalized word in the question
    MissingMember,
    /// The intent-specific question pattern did not match
    PatternMismatch,
    /// No message satisfied the conditions
    NoMatchingMessage,
    /// The matching message has no date field
    MissingDate,
    /// The matching message left nothing after "favorite"
    EmptyRemainder,
    /// The question has no supported intent
    UnsupportedIntent,
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NoMatch::MissingMember => "missing_member",
            NoMatch::PatternMismatch => "pattern_mismatch",
            NoMatch::NoMatchingMessage => "no_matching_message",
            NoMatch::MissingDate => "missing_date",
            NoMatch::EmptyRemainder => "empty_remainder",
            NoMatch::UnsupportedIntent => "unsupported_intent",
        };
        write!(f, "{}", reason)
    }
}

/// Result of a single extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Answered(String),
    NoMatch(NoMatch),
}

impl Extraction {
    pub fn answer(&self) -> Option<&str> {
        match self {
            Extraction::Answered(answer) => Some(answer.as_str()),
            Extraction::NoMatch(_) => None,
        }
    }
}

impl From<NoMatch> for Extraction {
    fn from(reason: NoMatch) -> Self {
        Extraction::NoMatch(reason)
    }
}

/// Where the final answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    SpecialCase,
    Extractor,
    Fallback,
}

/// Full trace of one question through the pipeline
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOutcome {
    pub answer: String,
    /// None when a special case answered before classification
    pub intent: Option<Intent>,
    pub member: Option<String>,
    pub source: AnswerSource,
    pub no_match: Option<NoMatch>,
}
