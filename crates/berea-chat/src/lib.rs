//! Chat Q&A over the topic table.
//!
//! The pipeline is stateless and reentrant; per-session context lives in
//! [`ChatSession`], created and owned by the hosting shell and passed in
//! explicitly.

pub mod pipeline;
pub mod session;

pub use pipeline::{answer_question, format_reply, ResolvedVerse, CLOSING_PROMPT, FALLBACK_SUGGESTION};
pub use session::{ChatMessage, ChatSession, GREETING};
