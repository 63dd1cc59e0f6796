//! Shared application state.

use std::collections::HashMap;
use std::time::Duration;

use berea_chat::ChatSession;
use berea_core::BereaConfig;
use berea_verse::{BibleApiSource, Translation};
use parking_lot::RwLock;
use uuid::Uuid;

/// Shared application state accessible from all route handlers.
///
/// The session map is the only mutable state; everything the pipeline
/// reads is immutable after startup.
pub struct AppState {
    pub config: BereaConfig,
    pub source: BibleApiSource,
    pub sessions: RwLock<HashMap<Uuid, ChatSession>>,
}

impl AppState {
    pub fn new(config: BereaConfig) -> berea_core::Result<Self> {
        let source = BibleApiSource::new(
            config.api_base.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self {
            config,
            source,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Translation used when a request doesn't name one.
    pub fn default_translation(&self) -> Translation {
        self.config
            .default_translation
            .parse()
            .unwrap_or_default()
    }
}
