//! Keyword-bucket search — exact keyword lookup into a fixed verse table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::extract::extract_keywords;

/// Hard cap on accumulated results across all matched keywords.
pub const MAX_RESULTS: usize = 5;

/// A canned search-result snippet. These come straight from the table and
/// are never resolved over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersePreview {
    pub reference: &'static str,
    pub text: &'static str,
}

const fn preview(reference: &'static str, text: &'static str) -> VersePreview {
    VersePreview { reference, text }
}

/// Keyword → verse previews.
static KEYWORD_VERSES: Lazy<HashMap<&'static str, Vec<VersePreview>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "love",
        vec![
            preview("1 Corinthians 13:4-7", "Love is patient, love is kind..."),
            preview("John 3:16", "For God so loved the world..."),
            preview("1 John 4:8", "Whoever does not love does not know God..."),
        ],
    );
    m.insert(
        "faith",
        vec![
            preview("Hebrews 11:1", "Now faith is confidence in what we hope for..."),
            preview("2 Corinthians 5:7", "For we live by faith, not by sight."),
        ],
    );
    m.insert(
        "prayer",
        vec![
            preview("Matthew 6:9-13", "This, then, is how you should pray..."),
            preview("Philippians 4:6", "Do not be anxious about anything..."),
        ],
    );
    m.insert(
        "salvation",
        vec![
            preview(
                "John 3:16",
                "For God so loved the world that he gave his one and only Son...",
            ),
            preview("Romans 10:9", "If you declare with your mouth, 'Jesus is Lord'..."),
        ],
    );
    m
});

/// Search the fixed table with keywords extracted from `query`.
///
/// A query matches a bucket when an extracted keyword equals a table key
/// exactly. Later matches append after earlier ones; results cap at
/// [`MAX_RESULTS`].
pub fn keyword_search(query: &str) -> Vec<VersePreview> {
    let mut results = Vec::new();
    for keyword in extract_keywords(query) {
        if let Some(previews) = KEYWORD_VERSES.get(keyword.as_str()) {
            results.extend(previews.iter().copied());
        }
    }
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_returns_bucket() {
        let results = keyword_search("love");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].reference, "1 Corinthians 13:4-7");
        assert_eq!(results[2].reference, "1 John 4:8");
    }

    #[test]
    fn test_matches_accumulate_in_keyword_order() {
        let results = keyword_search("tell me about love and faith");
        assert_eq!(results.len(), 5);
        // Love bucket first, then faith
        assert_eq!(results[0].reference, "1 Corinthians 13:4-7");
        assert_eq!(results[3].reference, "Hebrews 11:1");
    }

    #[test]
    fn test_results_capped_at_five() {
        let results = keyword_search("salvation prayer love");
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].reference, "John 3:16");
    }

    #[test]
    fn test_unknown_keywords_yield_nothing() {
        assert!(keyword_search("chariots of iron").is_empty());
    }
}
