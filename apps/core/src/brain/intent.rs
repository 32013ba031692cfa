//! Intent classification using substring and prefix checks.
//!
//! Rules are evaluated in a fixed priority order and the first match wins,
//! so "how many favorite cars" is a count question, never a favorites one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalize::normalize;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "How many X does Member have?"
    Count,
    /// "When is Member planning ...?"
    When,
    /// "What is Member's favorite X?"
    Favorites,
    /// Anything else
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Count => "count",
            Intent::When => "when",
            Intent::Favorites => "favorites",
            Intent::Unknown => "unknown",
        }
    }
}

/// A single classification rule, tested against the normalized question.
struct IntentRule {
    intent: Intent,
    matches: fn(&str) -> bool,
}

fn is_count(q: &str) -> bool {
    q.contains("how many")
}

fn is_when(q: &str) -> bool {
    q.starts_with("when") || q.contains(" when ")
}

fn is_favorites(q: &str) -> bool {
    q.contains("favorite") || q.contains("favourite")
}

/// Intent classifier with ordered rules
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the rules in priority order
    pub fn new() -> Self {
        let rules = vec![
            IntentRule {
                intent: Intent::Count,
                matches: is_count,
            },
            IntentRule {
                intent: Intent::When,
                matches: is_when,
            },
            IntentRule {
                intent: Intent::Favorites,
                matches: is_favorites,
            },
        ];

        Self { rules }
    }

    /// Classify a raw question
    pub fn classify(&self, question: &str) -> Intent {
        let q = normalize(question);

        self.rules
            .iter()
            .find(|rule| (rule.matches)(&q))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("How many dogs does Sam have?"), Intent::Count);
        assert_eq!(classifier.classify("  HOW MANY cars?"), Intent::Count);
    }

    #[test]
    fn test_when_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("When is Maya flying?"), Intent::When);
        assert_eq!(classifier.classify("Do you know when Maya flies?"), Intent::When);
        // "whenever" still starts with "when"
        assert_eq!(classifier.classify("whenever"), Intent::When);
        // no space-delimited "when" and no prefix
        assert_eq!(classifier.classify("Is Maya somewhen?"), Intent::Unknown);
    }

    #[test]
    fn test_favorites_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("What is Priya's favorite color?"), Intent::Favorites);
        assert_eq!(classifier.classify("What is Priya's favourite colour?"), Intent::Favorites);
    }

    #[test]
    fn test_priority_order() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("how many favorite cars does Sam have"),
            Intent::Count
        );
        assert_eq!(
            classifier.classify("When did Sam pick a favorite restaurant?"),
            Intent::When
        );
    }

    #[test]
    fn test_unknown_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Tell me about Sam"), Intent::Unknown);
        assert_eq!(classifier.classify(""), Intent::Unknown);
        assert_eq!(classifier.classify("   "), Intent::Unknown);
    }

    #[test]
    fn test_intent_labels() {
        assert_eq!(Intent::Count.to_string(), "count");
        assert_eq!(Intent::Unknown.label(), "unknown");
    }
}
