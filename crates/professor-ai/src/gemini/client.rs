//! Gemini API client struct, request building, and chunk parsing.

use std::time::Duration;

use crate::grounding::GroundingMetadata;
use crate::{AiError, ChatRequest, ResponseChunk, Role, Tool};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the JSON request body for one streamed message.
    pub(crate) fn build_request_body(request: &ChatRequest) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = request
            .history
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    Role::User => "user",
                    Role::Model => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": turn.text }]
                })
            })
            .collect();
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": request.message }]
        }));

        let mut body = serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "generationConfig": {
                "maxOutputTokens": request.max_output_tokens,
                "temperature": request.temperature,
            }
        });

        if !request.tools.is_empty() {
            let tools: Vec<_> = request
                .tools
                .iter()
                .map(|tool| match tool {
                    Tool::GoogleSearch => serde_json::json!({ "googleSearch": {} }),
                })
                .collect();
            body["tools"] = serde_json::Value::Array(tools);
        }

        body
    }

    /// Parse the JSON payload of one SSE event into a chunk.
    ///
    /// Only the first candidate is read. Thought parts are not answer text.
    pub(crate) fn parse_chunk(data: &str) -> Result<ResponseChunk, AiError> {
        let json: serde_json::Value =
            serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

        if let Some(error) = json.get("error") {
            let message = error["message"].as_str().unwrap_or("unknown error");
            return Err(AiError::ApiError(message.to_string()));
        }

        let candidate = &json["candidates"][0];

        let mut text: Option<String> = None;
        if let Some(parts) = candidate["content"]["parts"].as_array() {
            for part in parts {
                if part["thought"].as_bool() == Some(true) {
                    continue;
                }
                if let Some(t) = part["text"].as_str() {
                    text.get_or_insert_with(String::new).push_str(t);
                }
            }
        }

        let grounding_metadata = candidate
            .get("groundingMetadata")
            .and_then(GroundingMetadata::from_value);

        Ok(ResponseChunk {
            text,
            grounding_metadata,
        })
    }
}
