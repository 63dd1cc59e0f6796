//! Keyword extraction from free-text queries.

use once_cell::sync::Lazy;
use regex::Regex;

/// Articles, conjunctions, and WH-question words carry no search signal.
static STOP_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "the", "and", "or", "but",
];

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").expect("valid pattern"));

/// Extract meaningful keywords from a query.
///
/// Lowercases, tokenizes on letters-only boundaries, drops stop words and
/// tokens of length <= 2. Order-preserving; empty input yields an empty
/// sequence.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let keywords = extract_keywords("What is the Bible's view on love and faith?");
        assert_eq!(keywords, vec!["bible", "view", "love", "faith"]);
    }

    #[test]
    fn test_no_stop_words_or_short_tokens() {
        for kw in extract_keywords("how and why do we go to it or not") {
            assert!(kw.len() > 2);
            assert!(!STOP_WORDS.contains(&kw.as_str()));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   !?!  ").is_empty());
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(
            extract_keywords("grace-filled, mercy!"),
            vec!["grace", "filled", "mercy"]
        );
    }
}
