//! The explicit "active session" slot owned by the calling layer.

use std::sync::Arc;

use tracing::info;

use crate::ChatBackend;

use super::chat::ChatSession;
use super::types::{ModelSettings, SessionConfig};

/// Holds the backend and at most one active session.
///
/// Dispatch goes through the context (see `crate::dispatch`), so the
/// session it uses is always the one started last.
pub struct ChatContext {
    pub(crate) backend: Arc<dyn ChatBackend>,
    pub(crate) settings: ModelSettings,
    pub(crate) active: Option<ChatSession>,
}

impl ChatContext {
    pub fn new(backend: Arc<dyn ChatBackend>, settings: ModelSettings) -> Self {
        Self {
            backend,
            settings,
            active: None,
        }
    }

    /// Start a session for `config`, discarding the previous one.
    pub fn start_session(&mut self, config: SessionConfig) -> &ChatSession {
        let session = ChatSession::new(config, &self.settings);
        info!(
            session = %session.id(),
            depth = %config.depth_level,
            search = config.use_search_grounding,
            "started chat session"
        );
        self.active.insert(session)
    }

    /// Start over with the active session's config, dropping its history.
    ///
    /// Returns `None` when no session has been started yet.
    pub fn reset(&mut self) -> Option<&ChatSession> {
        let config = *self.active.as_ref()?.config();
        Some(self.start_session(config))
    }

    pub fn active_session(&self) -> Option<&ChatSession> {
        self.active.as_ref()
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ChatContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatContext")
            .field("settings", &self.settings)
            .field("active", &self.active)
            .finish()
    }
}
