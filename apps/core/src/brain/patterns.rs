//! Named extraction patterns.
//!
//! Each function takes normalized question text and returns the captured
//! phrase, if any. They are the fragile part of the pipeline and are kept
//! here so they can be tested in isolation.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static HOW_MANY_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"how many ([a-z ]+) does").expect("Invalid regex: how many ... does")
});

static FAVORITE_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"favou?rite ([a-z ?]+)").expect("Invalid regex: favorite category")
});

static FAVORITE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)favorite").expect("Invalid regex: favorite word")
});

static WHEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwhen\b").expect("Invalid regex: when word"));

/// Object phrase of "how many `<object>` does ...", trimmed.
pub fn count_object(normalized: &str) -> Option<String> {
    HOW_MANY_OBJECT
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|object| !object.is_empty())
}

/// Category phrase of "favorite `<category>`", with a trailing `?` removed.
pub fn favorite_category(normalized: &str) -> Option<String> {
    FAVORITE_CATEGORY
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches('?').trim().to_string())
        .filter(|category| !category.is_empty())
}

/// Matcher for "`<digits>` `<object>`" in message text.
///
/// The object is matched literally and case-insensitively.
pub fn quantity_matcher(object: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"(\d+) {}", regex::escape(object)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Digits captured by a [`quantity_matcher`], verbatim.
pub fn quantity_in(matcher: &Regex, text: &str) -> Option<String> {
    matcher
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text following the last case-insensitive "favorite" in `text`.
pub fn after_last_favorite(text: &str) -> Option<&str> {
    FAVORITE_WORD.find_iter(text).last().map(|m| &text[m.end()..])
}

/// Removes every standalone "when" from normalized text.
pub fn strip_when(normalized: &str) -> String {
    WHEN_WORD.replace_all(normalized, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_object() {
        assert_eq!(count_object("how many dogs does sam have?").as_deref(), Some("dogs"));
        assert_eq!(
            count_object("how many vintage cars does sam own").as_deref(),
            Some("vintage cars")
        );
        assert_eq!(count_object("how many dogs has sam got?"), None);
        assert_eq!(count_object("how many 3d printers does sam have"), None);
    }

    #[test]
    fn test_favorite_category() {
        assert_eq!(
            favorite_category("what is priya's favorite color?").as_deref(),
            Some("color")
        );
        assert_eq!(
            favorite_category("what are priya's favourite board games?").as_deref(),
            Some("board games")
        );
        assert_eq!(favorite_category("what is priya's favorite?"), None);
        assert_eq!(favorite_category("what does priya like?"), None);
    }

    #[test]
    fn test_quantity_matcher_captures_whole_number() {
        let matcher = quantity_matcher("dogs").unwrap();

        assert_eq!(quantity_in(&matcher, "Sam has 12 dogs at home").as_deref(), Some("12"));
        assert_eq!(quantity_in(&matcher, "Sam has 3 Dogs").as_deref(), Some("3"));
        assert_eq!(quantity_in(&matcher, "Sam has three dogs"), None);
        assert_eq!(quantity_in(&matcher, "Sam has 3 cats and dogs"), None);
    }

    #[test]
    fn test_quantity_matcher_escapes_object() {
        let matcher = quantity_matcher("c++ books").unwrap();
        assert_eq!(quantity_in(&matcher, "I own 4 c++ books").as_deref(), Some("4"));
    }

    #[test]
    fn test_after_last_favorite() {
        assert_eq!(
            after_last_favorite("My FAVORITE pick, my favorite color: blue"),
            Some(" color: blue")
        );
        assert_eq!(after_last_favorite("nothing here"), None);
    }

    #[test]
    fn test_strip_when() {
        assert_eq!(strip_when("when is maya flying"), " is maya flying");
        assert_eq!(strip_when("whenever maya flies"), "whenever maya flies");
    }
}
