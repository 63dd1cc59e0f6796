//! Study plan generation — fixed per-topic day sequences, truncated to the
//! requested duration.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

/// Topic used when the requested one has no plan.
pub const DEFAULT_TOPIC: &str = "salvation";

/// One day of a study plan. Day numbers are contiguous starting at 1.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudyPlanDay {
    pub day: u32,
    pub topic: &'static str,
    pub verses: &'static [&'static str],
}

const fn day(day: u32, topic: &'static str, verses: &'static [&'static str]) -> StudyPlanDay {
    StudyPlanDay { day, topic, verses }
}

static STUDY_PLANS: Lazy<HashMap<&'static str, Vec<StudyPlanDay>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "salvation",
        vec![
            day(1, "God's Love", &["John 3:16", "Romans 5:8"]),
            day(2, "The Sin Problem", &["Romans 3:23", "Isaiah 53:6"]),
            day(3, "Jesus the Solution", &["Romans 6:23", "1 Peter 3:18"]),
            day(4, "Faith Response", &["Ephesians 2:8-9", "John 1:12"]),
            day(5, "Assurance", &["1 John 5:11-13", "John 10:28-29"]),
        ],
    );
    m.insert(
        "prayer",
        vec![
            day(1, "The Lord's Prayer", &["Matthew 6:9-13"]),
            day(2, "Persistent Prayer", &["Luke 18:1-8", "1 Thessalonians 5:17"]),
            day(3, "Prayer Promises", &["Matthew 7:7-11", "John 14:13-14"]),
            day(4, "Prayer Posture", &["Philippians 4:6-7", "1 John 5:14-15"]),
        ],
    );
    m.insert(
        "love",
        vec![
            day(1, "God's Love", &["John 3:16", "1 John 4:9-10"]),
            day(2, "Loving Others", &["1 Corinthians 13:4-7", "John 13:34-35"]),
            day(3, "Love in Action", &["1 John 3:18", "Romans 12:9-10"]),
        ],
    );
    m
});

/// Generate a plan for `topic`, at most `duration_days` entries.
///
/// Topic lookup is case-insensitive. An unknown topic silently falls back
/// to the default sequence. Sequences shorter than the requested duration
/// are returned whole, never padded.
pub fn generate_plan(topic: &str, duration_days: usize) -> Vec<StudyPlanDay> {
    let key = topic.to_lowercase();
    let plan = STUDY_PLANS.get(key.as_str()).or_else(|| {
        debug!("no study plan for {:?}, using {}", topic, DEFAULT_TOPIC);
        STUDY_PLANS.get(DEFAULT_TOPIC)
    });

    match plan {
        Some(days) => days.iter().take(duration_days).copied().collect(),
        None => Vec::new(),
    }
}
