//! In-memory backend that replays scripted responses and records requests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};

use crate::{AiError, ChatBackend, ChatRequest, ChunkStream, ResponseChunk};

pub(crate) enum Script {
    /// Stream these items in order, then end.
    Stream(Vec<Result<ResponseChunk, AiError>>),
    /// Fail before any chunk is produced.
    OpenError(AiError),
    /// Never produce a chunk.
    Stall,
    /// Never finish opening the stream.
    StallOpen,
}

#[derive(Default)]
pub(crate) struct ScriptedBackend {
    scripts: Mutex<VecDeque<Script>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, script: Script) {
        self.scripts.lock().unwrap().push_back(script);
    }

    pub(crate) fn push_texts(&self, fragments: &[&str]) {
        let items = fragments
            .iter()
            .map(|text| Ok(ResponseChunk::text(*text)))
            .collect();
        self.push(Script::Stream(items));
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        let script = self.scripts.lock().unwrap().pop_front();
        match script {
            Some(Script::Stream(items)) => Ok(stream::iter(items).boxed()),
            Some(Script::OpenError(err)) => Err(err),
            Some(Script::Stall) => Ok(stream::pending().boxed()),
            Some(Script::StallOpen) => std::future::pending().await,
            None => Ok(stream::empty().boxed()),
        }
    }
}
