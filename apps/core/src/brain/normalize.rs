//! Text normalization and member name extraction.
//!
//! Every downstream stage compares against normalized text. Member names are
//! read from the original-case question, since capitalization is the only cue.

use regex::Regex;
use std::sync::LazyLock;

/// A capitalized word: one uppercase letter followed by lowercase letters.
// NOTE: expect() is acceptable here, the pattern is a compile-time literal
static CAPITALIZED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+\b").expect("Invalid regex: capitalized word")
});

/// Question openers that are capitalized but never name a member.
const QUESTION_WORDS: &[&str] = &[
    "When", "How", "What", "Who", "Whose", "Where", "Which", "Why", "Is", "Are", "Was", "Were",
    "Do", "Does", "Did", "Can", "Could", "Will", "Would",
];

/// Lowercase and trim surrounding whitespace.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns the first capitalized word of the question, case preserved.
///
/// This is a cheap proxy for "who the question is about" and has no name
/// registry behind it: any capitalized word that is not a question opener
/// is taken as the member, including sentence-initial ones like "Tell".
pub fn extract_member_name(question: &str) -> Option<String> {
    CAPITALIZED_WORD
        .find_iter(question)
        .map(|m| m.as_str())
        .find(|word| !QUESTION_WORDS.contains(word))
        .map(str::to_string)
}

/// Case-insensitive check that `text` mentions `member`.
pub fn mentions(text: &str, member: &str) -> bool {
    text.to_lowercase().contains(&member.to_lowercase())
}
