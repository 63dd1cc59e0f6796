//! Verse reference parsing — `"Book Chapter:Verse"` and `"Book Chapter:Verse-Verse"`.

use berea_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// The verse portion of a reference. Ranges are kept intact rather than
/// decomposed into individual verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseRange {
    Single(u32),
    Span(u32, u32),
}

impl VerseRange {
    /// First verse covered by this range.
    pub fn start(&self) -> u32 {
        match self {
            VerseRange::Single(v) => *v,
            VerseRange::Span(a, _) => *a,
        }
    }
}

impl std::fmt::Display for VerseRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerseRange::Single(v) => write!(f, "{}", v),
            VerseRange::Span(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

/// A parsed verse reference. Immutable once parsed; chapter and verse are
/// always >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    pub verse: VerseRange,
}

impl VerseReference {
    /// Parse a reference like `John 3:16`, `1 Corinthians 13:4-7`.
    ///
    /// The book may contain spaces; everything before the last
    /// space-separated token is the book name.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (book, chapter_verse) = input
            .rsplit_once(' ')
            .ok_or_else(|| Error::Parse(format!("missing book or chapter: {:?}", input)))?;

        let book = book.trim();
        if book.is_empty() {
            return Err(Error::Parse(format!("missing book name: {:?}", input)));
        }

        let (chapter, verse) = chapter_verse
            .split_once(':')
            .ok_or_else(|| Error::Parse(format!("missing ':' separator: {:?}", input)))?;

        let chapter: u32 = chapter
            .parse()
            .map_err(|_| Error::Parse(format!("bad chapter in {:?}", input)))?;

        let verse = match verse.split_once('-') {
            Some((a, b)) => {
                let a: u32 = a
                    .parse()
                    .map_err(|_| Error::Parse(format!("bad verse in {:?}", input)))?;
                let b: u32 = b
                    .parse()
                    .map_err(|_| Error::Parse(format!("bad verse in {:?}", input)))?;
                if b < a {
                    return Err(Error::Parse(format!("backwards range in {:?}", input)));
                }
                VerseRange::Span(a, b)
            }
            None => VerseRange::Single(
                verse
                    .parse()
                    .map_err(|_| Error::Parse(format!("bad verse in {:?}", input)))?,
            ),
        };

        if chapter < 1 || verse.start() < 1 {
            return Err(Error::Parse(format!(
                "chapter and verse must be >= 1: {:?}",
                input
            )));
        }

        Ok(Self {
            book: book.to_string(),
            chapter,
            verse,
        })
    }
}

impl std::str::FromStr for VerseReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VerseReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}
