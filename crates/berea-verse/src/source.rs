//! Verse text sources — the external HTTP service and an in-memory fixture.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use berea_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::reference::VerseReference;
use crate::translation::Translation;

/// Resolved verse text. Created per lookup, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseText {
    /// Canonical reference as reported by the source.
    pub reference: String,
    pub text: String,
    pub translation: Translation,
}

/// A source of verse text. The one seam between the pipeline and the
/// network: swap in [`FixtureSource`] to run without it.
pub trait VerseSource: Send + Sync {
    /// Resolve a reference to verse text in the given translation.
    ///
    /// Failure is a normal outcome here — callers fall back per verse
    /// rather than aborting a multi-verse response.
    fn resolve(
        &self,
        reference: &VerseReference,
        translation: Translation,
    ) -> impl Future<Output = Result<VerseText>> + Send;
}

/// Upstream response body. Only `reference` and `text` are required.
#[derive(Debug, Deserialize)]
struct ApiVerse {
    reference: String,
    text: String,
}

/// Client for the public verse API (`bible-api.com` URL syntax).
///
/// One GET per lookup with a bounded timeout. No retry, no backoff,
/// no cache.
pub struct BibleApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl BibleApiSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn verse_url(&self, reference: &VerseReference, translation: Translation) -> String {
        format!(
            "{}/{}+{}:{}?translation={}",
            self.base_url,
            reference.book.replace(' ', "+"),
            reference.chapter,
            reference.verse,
            translation
        )
    }
}

impl VerseSource for BibleApiSource {
    fn resolve(
        &self,
        reference: &VerseReference,
        translation: Translation,
    ) -> impl Future<Output = Result<VerseText>> + Send {
        let url = self.verse_url(reference, translation);
        let display_ref = reference.to_string();
        let client = self.client.clone();

        async move {
            debug!("GET {}", url);

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| Error::Lookup(format!("request failed for {}: {}", display_ref, e)))?;

            if !response.status().is_success() {
                warn!("Verse service returned {} for {}", response.status(), display_ref);
                return Err(Error::Lookup(format!(
                    "status {} for {}",
                    response.status(),
                    display_ref
                )));
            }

            let body: ApiVerse = response
                .json()
                .await
                .map_err(|e| Error::Lookup(format!("malformed response for {}: {}", display_ref, e)))?;

            Ok(VerseText {
                reference: body.reference,
                text: body.text.trim().to_string(),
                translation,
            })
        }
    }
}

/// In-memory source keyed by canonical reference string. Used in tests and
/// anywhere the network is unavailable.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    verses: HashMap<String, String>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a verse, keyed by its display form (e.g. `"John 3:16"`).
    pub fn with_verse(mut self, reference: &str, text: &str) -> Self {
        self.verses.insert(reference.to_string(), text.to_string());
        self
    }
}

impl VerseSource for FixtureSource {
    fn resolve(
        &self,
        reference: &VerseReference,
        translation: Translation,
    ) -> impl Future<Output = Result<VerseText>> + Send {
        let key = reference.to_string();
        let found = self.verses.get(&key).cloned();

        async move {
            match found {
                Some(text) => Ok(VerseText {
                    reference: key,
                    text,
                    translation,
                }),
                None => Err(Error::Lookup(format!("no fixture for {}", key))),
            }
        }
    }
}
