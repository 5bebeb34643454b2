//! Message dispatch: send one utterance and stream the answer back.
//!
//! The answer arrives as a lazy sequence of chunks. Each chunk's text is
//! handed to the caller's callback as it arrives and appended to the full
//! answer. Grounding metadata follows a "last one wins" rule: a chunk that
//! carries metadata replaces whatever an earlier chunk carried, and chunks
//! without metadata leave it alone.

use std::sync::Arc;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::grounding::{extract_sources, GroundingMetadata, Source};
use crate::session::ChatContext;
use crate::{AiError, ChunkStream};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Chat session not initialized")]
    SessionNotInitialized,
    #[error("dispatch failed: {0}")]
    DispatchFailed(#[from] AiError),
    #[error("dispatch cancelled")]
    Cancelled,
}

/// The assembled answer of one dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchOutcome {
    pub full_text: String,
    pub grounding_metadata: Option<GroundingMetadata>,
}

impl DispatchOutcome {
    /// Web sources cited by the answer.
    pub fn sources(&self) -> Vec<Source> {
        extract_sources(self.grounding_metadata.as_ref())
    }
}

impl ChatContext {
    /// Send `text` in the active session, calling `on_fragment` per fragment.
    ///
    /// Fails with [`DispatchError::SessionNotInitialized`] before touching the
    /// backend when no session was started. On any stream error the partial
    /// answer is dropped and the session history is left as it was.
    pub async fn dispatch<F>(
        &mut self,
        text: &str,
        on_fragment: F,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        F: FnMut(&str),
    {
        self.dispatch_inner(text, on_fragment, None).await
    }

    /// Like [`ChatContext::dispatch`], but stops between fragments once
    /// `cancel` fires and returns [`DispatchError::Cancelled`].
    pub async fn dispatch_with_cancel<F>(
        &mut self,
        text: &str,
        on_fragment: F,
        cancel: &CancellationToken,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        F: FnMut(&str),
    {
        self.dispatch_inner(text, on_fragment, Some(cancel)).await
    }

    async fn dispatch_inner<F>(
        &mut self,
        text: &str,
        on_fragment: F,
        cancel: Option<&CancellationToken>,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        F: FnMut(&str),
    {
        let backend = Arc::clone(&self.backend);
        let session = self
            .active
            .as_mut()
            .ok_or(DispatchError::SessionNotInitialized)?;

        let request = session.request(text);
        debug!(session = %session.id(), chars = text.len(), "dispatching message");

        let opened = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(DispatchError::Cancelled),
                stream = backend.open_stream(&request) => stream.map_err(DispatchError::from),
            },
            None => backend.open_stream(&request).await.map_err(DispatchError::from),
        };
        let result = match opened {
            Ok(stream) => consume_stream(stream, on_fragment, cancel).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => {
                session.record_exchange(request.message, outcome.full_text.clone());
                debug!(
                    session = %session.id(),
                    chars = outcome.full_text.len(),
                    grounded = outcome.grounding_metadata.is_some(),
                    "answer complete"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(session = %session.id(), error = %e, "dispatch failed");
                Err(e)
            }
        }
    }
}

/// Drain `stream` in order, assembling the answer.
pub async fn consume_stream<F>(
    mut stream: ChunkStream,
    mut on_fragment: F,
    cancel: Option<&CancellationToken>,
) -> Result<DispatchOutcome, DispatchError>
where
    F: FnMut(&str),
{
    let mut outcome = DispatchOutcome::default();

    loop {
        let next = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(DispatchError::Cancelled),
                item = stream.next() => item,
            },
            None => stream.next().await,
        };

        let Some(item) = next else {
            break;
        };
        let chunk = item?;

        let fragment = chunk.text.as_deref().unwrap_or("");
        outcome.full_text.push_str(fragment);
        on_fragment(fragment);

        if chunk.grounding_metadata.is_some() {
            outcome.grounding_metadata = chunk.grounding_metadata;
        }
    }

    Ok(outcome)
}
