//! Verse references, translations, and verse-text resolution.
//!
//! Resolution goes through the [`VerseSource`] trait so the external HTTP
//! dependency can be swapped for an in-memory fixture in tests.

pub mod reference;
pub mod source;
pub mod translation;

pub use reference::{VerseRange, VerseReference};
pub use source::{BibleApiSource, FixtureSource, VerseSource, VerseText};
pub use translation::Translation;
