//! Pattern-bucket matching — ordered regex patterns over the raw query.

use once_cell::sync::Lazy;
use regex::Regex;

/// A topic bucket: a regex pattern, the verses to resolve when it matches,
/// and the sentence that opens the reply.
#[derive(Debug, Clone, Copy)]
pub struct TopicEntry {
    pub name: &'static str,
    pub pattern: &'static str,
    pub verses: &'static [&'static str],
    pub response_prefix: &'static str,
}

/// Topic table, in match order. The first pattern that matches anywhere in
/// the lowercased query wins, so order is the tie-break.
pub static TOPIC_TABLE: &[TopicEntry] = &[
    TopicEntry {
        name: "salvation",
        pattern: "salvation|saved|born again",
        verses: &["John 3:16-17", "Romans 10:9-10", "Ephesians 2:8-9"],
        response_prefix: "Here's what the Bible says about salvation:",
    },
    TopicEntry {
        name: "prayer",
        pattern: "pray|prayer",
        verses: &["Matthew 6:9-13", "Philippians 4:6-7", "1 Thessalonians 5:17"],
        response_prefix: "The Bible teaches us about prayer:",
    },
    TopicEntry {
        name: "love",
        pattern: "love|love others",
        verses: &["1 Corinthians 13:4-7", "John 13:34-35", "1 John 4:7-8"],
        response_prefix: "Here are key verses about love:",
    },
    TopicEntry {
        name: "faith",
        pattern: "faith|believe",
        verses: &["Hebrews 11:1", "2 Corinthians 5:7", "Romans 10:17"],
        response_prefix: "The Bible defines faith as:",
    },
    TopicEntry {
        name: "hope",
        pattern: "hope|future",
        verses: &["Jeremiah 29:11", "Romans 15:13", "Hebrews 6:19"],
        response_prefix: "Scripture offers hope through these verses:",
    },
];

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    TOPIC_TABLE
        .iter()
        .map(|entry| Regex::new(entry.pattern).expect("valid pattern"))
        .collect()
});

/// Match a query against the topic table. Returns the first matching
/// bucket, or `None` — not matching is a normal outcome, not an error.
pub fn match_topic(query: &str) -> Option<&'static TopicEntry> {
    let lower = query.to_lowercase();
    COMPILED
        .iter()
        .position(|re| re.is_match(&lower))
        .map(|i| &TOPIC_TABLE[i])
}
