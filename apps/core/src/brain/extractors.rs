//! Answer extractors, one per supported intent.
//!
//! Each extractor scans the messages in order and stops at the first record
//! that mentions the member and satisfies its textual conditions. There is
//! no ranking and no aggregation across several matches.

use std::sync::LazyLock;
use tracing::debug;

use super::extraction::{Extraction, NoMatch};
use super::keywords::QueryTermExtractor;
use super::normalize::{extract_member_name, mentions, normalize};
use super::patterns::{
    after_last_favorite, count_object, favorite_category, quantity_in, quantity_matcher,
};
use crate::models::MessageRecord;

static QUERY_TERMS: LazyLock<QueryTermExtractor> = LazyLock::new(QueryTermExtractor::new);

/// "How many `<object>` does `<Member>` have?"
pub fn answer_count_question(question: &str, messages: &[MessageRecord]) -> Extraction {
    let Some(member) = extract_member_name(question) else {
        return NoMatch::MissingMember.into();
    };
    let Some(object) = count_object(&normalize(question)) else {
        return NoMatch::PatternMismatch.into();
    };
    let Some(matcher) = quantity_matcher(&object) else {
        return NoMatch::PatternMismatch.into();
    };

    messages
        .iter()
        .map(MessageRecord::body)
        .filter(|body| mentions(body, &member))
        .find_map(|body| quantity_in(&matcher, body))
        .map(|digits| Extraction::Answered(format!("{} has {} {}.", member, digits, object)))
        .unwrap_or(Extraction::NoMatch(NoMatch::NoMatchingMessage))
}

/// "When is `<Member>` planning `<event>`?"
///
/// A message answers only if it contains every query term. The first such
/// message decides the outcome, even when it carries no date.
pub fn answer_when_question(question: &str, messages: &[MessageRecord]) -> Extraction {
    let Some(member) = extract_member_name(question) else {
        return NoMatch::MissingMember.into();
    };
    let terms = QUERY_TERMS.extract(question);

    let Some((index, record)) = messages.iter().enumerate().find(|(_, record)| {
        let body = record.body().to_lowercase();
        mentions(&body, &member) && terms.iter().all(|term| body.contains(term.as_str()))
    }) else {
        return NoMatch::NoMatchingMessage.into();
    };

    debug!("When question matched message #{} (terms: {:?})", index, terms);

    match record.date_value() {
        Some(date) => Extraction::Answered(format!("{} is planning that on {}.", member, date)),
        None => NoMatch::MissingDate.into(),
    }
}

/// "What is `<Member>`'s favorite `<category>`?"
///
/// Only the American spelling is looked for in messages, and the first
/// matching message is final even if nothing follows its "favorite".
pub fn answer_favorites_question(question: &str, messages: &[MessageRecord]) -> Extraction {
    let Some(member) = extract_member_name(question) else {
        return NoMatch::MissingMember.into();
    };
    let Some(category) = favorite_category(&normalize(question)) else {
        return NoMatch::PatternMismatch.into();
    };
    let first_word = category.split_whitespace().next().unwrap_or(category.as_str());

    let Some(body) = messages.iter().map(MessageRecord::body).find(|body| {
        let lower = body.to_lowercase();
        mentions(&lower, &member) && lower.contains("favorite") && lower.contains(first_word)
    }) else {
        return NoMatch::NoMatchingMessage.into();
    };

    let remainder = after_last_favorite(body)
        .map(|rest| favorite_remainder(rest, &category, first_word))
        .unwrap_or_default();

    if remainder.is_empty() {
        return NoMatch::EmptyRemainder.into();
    }

    Extraction::Answered(format!(
        "{}'s favorite {} are {}.",
        member, category, remainder
    ))
}

fn is_lead_punctuation(c: char) -> bool {
    matches!(c, ':' | '-' | '.') || c.is_whitespace()
}

/// Cleans the text after "favorite": drops a repeated category word and the
/// punctuation around the listed items.
fn favorite_remainder<'a>(rest: &'a str, category: &str, first_word: &str) -> &'a str {
    let rest = rest.trim_start_matches(is_lead_punctuation);
    let rest = strip_word_prefix(rest, category)
        .or_else(|| strip_word_prefix(rest, first_word))
        .unwrap_or(rest);

    rest.trim_start_matches(is_lead_punctuation)
        .trim_end()
        .trim_end_matches(['.', '!'])
        .trim_end()
}

/// `text` without a leading `word` (ASCII case-insensitive, whole word only).
fn strip_word_prefix<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let head = text.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let tail = &text[word.len()..];
    match tail.chars().next() {
        Some(c) if c.is_alphanumeric() => None,
        _ => Some(tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(bodies: &[&str]) -> Vec<MessageRecord> {
        bodies.iter().map(|b| MessageRecord::with_message(b)).collect()
    }

    #[test]
    fn test_count_answer() {
        let messages = msgs(&["Sam has 3 dogs at home"]);
        let result = answer_count_question("How many dogs does Sam have?", &messages);
        assert_eq!(result, Extraction::Answered("Sam has 3 dogs.".to_string()));
    }

    #[test]
    fn test_count_requires_member_mention() {
        let messages = msgs(&["Maya has 2 dogs", "Sam walks his 14 dogs daily"]);
        let result = answer_count_question("How many dogs does Sam have?", &messages);
        assert_eq!(result.answer(), Some("Sam has 14 dogs."));
    }

    #[test]
    fn test_count_without_adjacent_digit() {
        let messages = msgs(&["Sam has dogs, 3 of them", "Sam has three dogs"]);
        let result = answer_count_question("How many dogs does Sam have?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::NoMatchingMessage));
    }

    #[test]
    fn test_count_pattern_mismatch() {
        let messages = msgs(&["Sam has 3 dogs"]);
        let result = answer_count_question("How many dogs has Sam got?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::PatternMismatch));
    }

    #[test]
    fn test_count_missing_member() {
        let messages = msgs(&["sam has 3 dogs"]);
        let result = answer_count_question("how many dogs does sam have?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::MissingMember));
    }

    #[test]
    fn test_when_answer() {
        let messages = vec![
            MessageRecord::with_message("Maya is planning her trip to Paris").dated("2024-05-01"),
        ];
        let result = answer_when_question("When is Maya planning her trip to Paris?", &messages);
        assert_eq!(
            result,
            Extraction::Answered("Maya is planning that on 2024-05-01.".to_string())
        );
    }

    #[test]
    fn test_when_first_match_without_date_is_final() {
        let messages = vec![
            MessageRecord::with_message("Maya is planning her trip to Paris"),
            MessageRecord::with_message("Maya booked her trip to Paris").dated("2024-06-01"),
        ];
        let result = answer_when_question("When is Maya planning her trip to Paris?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::MissingDate));
    }

    #[test]
    fn test_when_requires_every_term() {
        let messages = vec![MessageRecord::with_message("Maya loves Paris").dated("2024-05-01")];
        let result = answer_when_question("When is Maya planning her trip to Paris?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::NoMatchingMessage));
    }

    #[test]
    fn test_when_is_all_or_nothing_on_terms() {
        let record: MessageRecord = serde_json::from_value(serde_json::json!({
            "text": "Dinner with Omar on the rooftop",
            "timestamp": "2025-01-10T19:00:00"
        }))
        .unwrap();
        let result = answer_when_question("When is Omar's dinner on the rooftop?", &[record]);
        // "omar's" is a term and the message only says "Omar"
        assert_eq!(result, Extraction::NoMatch(NoMatch::NoMatchingMessage));

        let record: MessageRecord = serde_json::from_value(serde_json::json!({
            "text": "Dinner with Omar on the rooftop",
            "timestamp": "2025-01-10T19:00:00"
        }))
        .unwrap();
        let result = answer_when_question("When does Omar have dinner on the rooftop?", &[record]);
        assert_eq!(result, Extraction::NoMatch(NoMatch::NoMatchingMessage));

        let record: MessageRecord = serde_json::from_value(serde_json::json!({
            "text": "Omar dinner on the rooftop",
            "timestamp": "2025-01-10T19:00:00"
        }))
        .unwrap();
        let result = answer_when_question("When is Omar dinner on the rooftop?", &[record]);
        assert_eq!(
            result.answer(),
            Some("Omar is planning that on 2025-01-10T19:00:00.")
        );
    }

    #[test]
    fn test_favorites_answer() {
        let messages = msgs(&["Priya says her favorite color: blue and green"]);
        let result = answer_favorites_question("What is Priya's favorite color?", &messages);
        assert_eq!(
            result,
            Extraction::Answered("Priya's favorite color are blue and green.".to_string())
        );
    }

    #[test]
    fn test_favorites_uses_last_favorite() {
        let messages = msgs(&["Priya's FAVORITE season is spring; her favorite color - teal."]);
        let result = answer_favorites_question("What is Priya's favorite color?", &messages);
        assert_eq!(result.answer(), Some("Priya's favorite color are teal."));
    }

    #[test]
    fn test_favorites_ignores_british_spelling_in_messages() {
        let messages = msgs(&["Priya's favourite color: red"]);
        let result = answer_favorites_question("What is Priya's favourite color?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::NoMatchingMessage));
    }

    #[test]
    fn test_favorites_empty_remainder_stops_scan() {
        let messages = msgs(&[
            "Priya picked a color, it is her favorite",
            "Priya says her favorite color: blue",
        ]);
        let result = answer_favorites_question("What is Priya's favorite color?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::EmptyRemainder));
    }

    #[test]
    fn test_favorites_pattern_mismatch() {
        let messages = msgs(&["Priya says her favorite color: blue"]);
        let result = answer_favorites_question("What does Priya like?", &messages);
        assert_eq!(result, Extraction::NoMatch(NoMatch::PatternMismatch));
    }

    #[test]
    fn test_strip_word_prefix() {
        assert_eq!(strip_word_prefix("Color: blue", "color"), Some(": blue"));
        assert_eq!(strip_word_prefix("colorful socks", "color"), None);
        assert_eq!(strip_word_prefix("col", "color"), None);
        assert_eq!(strip_word_prefix("color", "color"), Some(""));
    }
}
