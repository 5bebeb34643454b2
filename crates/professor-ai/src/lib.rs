//! Chat engine for Professor Geral.
//!
//! Everything between the front end and the hosted model lives here:
//! - Session manager: lesson settings become a system instruction and tool list
//! - Message dispatcher: streams an answer fragment by fragment
//! - Grounding: turns search citations into a list of sources
//! - Gemini client speaking the Generative Language API over SSE

pub mod dispatch;
pub mod gemini;
pub mod grounding;
pub mod message;
pub mod session;
pub mod streaming;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

pub use dispatch::{DispatchError, DispatchOutcome};
pub use gemini::{GeminiClient, GeminiConfig};
pub use grounding::{extract_sources, GroundingChunk, GroundingMetadata, Source, WebSource};
pub use message::{Message, Sender};
pub use session::{ChatContext, ChatSession, ModelSettings, SessionConfig};

/// Lazy, forward-only sequence of response chunks for one message.
pub type ChunkStream = BoxStream<'static, Result<ResponseChunk, AiError>>;

/// The hosted model, seen from the dispatcher.
///
/// Implementations open one streaming response per request. Auth, transport
/// and timeouts are entirely their concern.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, AiError>;
}

/// Everything the backend needs to answer one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system_instruction: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub tools: Vec<Tool>,
    /// Earlier turns of the same session, oldest first.
    pub history: Vec<Turn>,
    pub message: String,
}

/// Capabilities the model may use while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    GoogleSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One element of a streamed answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseChunk {
    pub text: Option<String>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

impl ResponseChunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            grounding_metadata: None,
        }
    }

    pub fn with_grounding(mut self, metadata: GroundingMetadata) -> Self {
        self.grounding_metadata = Some(metadata);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}
