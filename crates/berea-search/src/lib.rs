//! Query understanding over fixed knowledge tables.
//!
//! Two independent matching strategies, kept separate on purpose: the
//! keyword-bucket search used by the search surface, and the pattern-bucket
//! matcher used by the chat pipeline. The same query can legitimately land
//! in different buckets depending on which strategy a call site uses.

pub mod extract;
pub mod keywords;
pub mod patterns;

pub use extract::extract_keywords;
pub use keywords::{keyword_search, VersePreview, MAX_RESULTS};
pub use patterns::{match_topic, TopicEntry, TOPIC_TABLE};
