//! Server-Sent Events (SSE) streaming parser.
//!
//! Gemini's `streamGenerateContent?alt=sse` endpoint answers with one SSE
//! event per partial response. This module turns any buffered byte source
//! into a lazy stream of those events, so callers pull them one at a time.

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event data (JSON string). Multi-line data is joined with `\n`.
    pub data: String,
}

struct ParserState<R> {
    lines: Lines<R>,
    data: String,
    done: bool,
}

impl<R> ParserState<R> {
    fn take_event(&mut self) -> SseEvent {
        SseEvent {
            data: std::mem::take(&mut self.data),
        }
    }
}

/// Wrap a reqwest response body as a buffered async reader.
pub fn response_reader(response: reqwest::Response) -> impl AsyncBufRead + Unpin + Send + 'static {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    tokio::io::BufReader::new(StreamReader::new(byte_stream))
}

/// Parse SSE events lazily from `reader`.
///
/// The stream ends after the body is exhausted (a trailing event without a
/// terminating blank line is still emitted) or after the first read error.
pub fn sse_events<R>(reader: R) -> BoxStream<'static, Result<SseEvent, AiError>>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let state = ParserState {
        lines: reader.lines(),
        data: String::new(),
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.done {
            return None;
        }

        loop {
            let line = match state.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    state.done = true;
                    if state.data.is_empty() {
                        return None;
                    }
                    let event = state.take_event();
                    return Some((Ok(event), state));
                }
                Err(e) => {
                    state.done = true;
                    return Some((Err(AiError::NetworkError(e.to_string())), state));
                }
            };

            if line.is_empty() {
                // Empty line = end of event
                if !state.data.is_empty() {
                    let event = state.take_event();
                    return Some((Ok(event), state));
                }
                continue;
            }

            if let Some(data) = line.strip_prefix("data:") {
                if !state.data.is_empty() {
                    state.data.push('\n');
                }
                state.data.push_str(data.strip_prefix(' ').unwrap_or(data));
            }
            // Ignore other fields (event:, id:, retry:, comments)
        }
    })
    .boxed()
}
