//! The Q&A pipeline: pattern match, per-verse resolution, reply formatting.

use berea_search::{match_topic, TopicEntry};
use berea_verse::{Translation, VerseReference, VerseSource};
use tracing::debug;

/// Reply when no topic pattern matches. A deterministic suggestion, not an
/// error.
pub const FALLBACK_SUGGESTION: &str = "I'd love to help you explore that topic in Scripture! \
Could you be more specific about what you're looking for? For example, you could ask about \
'what the Bible says about prayer' or 'verses about hope'. Common topics to try: salvation, \
prayer, love, faith, and hope.";

/// Fixed closing line inviting further questions.
pub const CLOSING_PROMPT: &str = "*Would you like me to explain any of these verses further?*";

/// A verse reference paired with its resolved text, or `None` when
/// resolution or parsing failed.
#[derive(Debug, Clone)]
pub struct ResolvedVerse {
    pub reference: String,
    pub text: Option<String>,
}

/// Assemble the reply: prefix sentence, one line-pair per verse, closing
/// prompt. Failed verses get a manual-lookup placeholder instead of being
/// dropped.
pub fn format_reply(entry: &TopicEntry, resolved: &[ResolvedVerse]) -> String {
    let mut reply = format!("{}\n\n", entry.response_prefix);
    for verse in resolved {
        match &verse.text {
            Some(text) => {
                reply.push_str(&format!("**{}**: {}\n\n", verse.reference, text));
            }
            None => {
                reply.push_str(&format!("**{}** - [Look up this verse]\n\n", verse.reference));
            }
        }
    }
    reply.push_str(CLOSING_PROMPT);
    reply
}

/// Answer a free-text question.
///
/// Matches the query against the topic table, resolves each of the bucket's
/// verses independently, and formats the reply. Every failure is absorbed
/// here; the caller always gets some text back.
pub async fn answer_question<S: VerseSource>(
    source: &S,
    question: &str,
    translation: Translation,
) -> String {
    let entry = match match_topic(question) {
        Some(entry) => entry,
        None => {
            debug!("no topic matched {:?}", question);
            return FALLBACK_SUGGESTION.to_string();
        }
    };

    let mut resolved = Vec::with_capacity(entry.verses.len());
    for reference in entry.verses {
        let text = match VerseReference::parse(reference) {
            Ok(parsed) => match source.resolve(&parsed, translation).await {
                Ok(verse) => Some(verse.text),
                Err(e) => {
                    debug!("resolution failed for {}: {}", reference, e);
                    None
                }
            },
            Err(e) => {
                debug!("unparseable table reference {}: {}", reference, e);
                None
            }
        };
        resolved.push(ResolvedVerse {
            reference: reference.to_string(),
            text,
        });
    }

    format_reply(entry, &resolved)
}
