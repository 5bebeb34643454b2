//! ChatBackend implementation for GeminiClient.

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::streaming::{response_reader, sse_events};
use crate::{AiError, ChatBackend, ChatRequest, ChunkStream};

use super::client::GeminiClient;

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn open_stream(&self, request: &ChatRequest) -> Result<ChunkStream, AiError> {
        let body = Self::build_request_body(request);
        let url = self.stream_url(&request.model);

        debug!(
            model = %request.model,
            history = request.history.len(),
            tools = request.tools.len(),
            "Gemini API streaming request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let chunks = sse_events(response_reader(response))
            .map(|event| event.and_then(|event| Self::parse_chunk(&event.data)));

        Ok(chunks.boxed())
    }
}
