//! Answer Engine - Main orchestrator for the Brain module.
//!
//! Composes the stages for one question:
//! 1. Special-case table (fixed answers, no data needed)
//! 2. Intent classification
//! 3. The extractor for that intent
//! 4. Fallback sentence when nothing answered

use tracing::debug;

use super::extraction::{AnswerOutcome, AnswerSource, Extraction, NoMatch, FALLBACK_ANSWER};
use super::extractors::{answer_count_question, answer_favorites_question, answer_when_question};
use super::intent::{Intent, IntentClassifier};
use super::normalize::extract_member_name;
use super::special_cases::SpecialCaseTable;
use crate::models::MessageRecord;

/// Main analyzer that answers questions from member messages.
///
/// Holds no per-question state: the same inputs always give the same answer.
pub struct AnswerEngine {
    special_cases: SpecialCaseTable,
    intent_classifier: IntentClassifier,
}

impl Default for AnswerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerEngine {
    /// Create an engine with the built-in special cases
    pub fn new() -> Self {
        Self::with_special_cases(SpecialCaseTable::builtin())
    }

    /// Create an engine with a caller-provided special-case table
    pub fn with_special_cases(special_cases: SpecialCaseTable) -> Self {
        Self {
            special_cases,
            intent_classifier: IntentClassifier::new(),
        }
    }

    pub fn special_cases(&self) -> &SpecialCaseTable {
        &self.special_cases
    }

    /// Answer a question. Never fails; unanswerable questions get the fallback.
    pub fn answer(&self, question: &str, messages: &[MessageRecord]) -> String {
        self.analyze(question, messages).answer
    }

    /// Answer a question and report how the answer was reached
    pub fn analyze(&self, question: &str, messages: &[MessageRecord]) -> AnswerOutcome {
        if let Some(fixed) = self.special_cases.lookup(question) {
            debug!("Special case matched for question: {:?}", question);
            return AnswerOutcome {
                answer: fixed.to_string(),
                intent: None,
                member: None,
                source: AnswerSource::SpecialCase,
                no_match: None,
            };
        }

        let intent = self.intent_classifier.classify(question);
        let extraction = Self::dispatch(intent, question, messages);
        let member = extract_member_name(question);

        let outcome = match extraction {
            Extraction::Answered(answer) => AnswerOutcome {
                answer,
                intent: Some(intent),
                member,
                source: AnswerSource::Extractor,
                no_match: None,
            },
            Extraction::NoMatch(reason) => AnswerOutcome {
                answer: FALLBACK_ANSWER.to_string(),
                intent: Some(intent),
                member,
                source: AnswerSource::Fallback,
                no_match: Some(reason),
            },
        };

        debug!(
            "Intent: {} | member: {:?} | source: {:?} | no_match: {:?}",
            intent, outcome.member, outcome.source, outcome.no_match
        );

        outcome
    }

    fn dispatch(intent: Intent, question: &str, messages: &[MessageRecord]) -> Extraction {
        match intent {
            Intent::Count => answer_count_question(question, messages),
            Intent::When => answer_when_question(question, messages),
            Intent::Favorites => answer_favorites_question(question, messages),
            Intent::Unknown => NoMatch::UnsupportedIntent.into(),
        }
    }
}
