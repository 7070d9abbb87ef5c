//! Server-sent event plumbing shared by the provider clients.
//!
//! DESIGN
//! ======
//! Providers stream completions as SSE over HTTP. Chunk boundaries do not
//! align with line boundaries, so `SseLineBuffer` reassembles raw bytes into
//! complete `data:` payloads. `text_fragment_stream` adapts a chunked byte
//! stream plus a provider-specific payload extractor into the neutral
//! [`TextStream`]. Both pieces are pure enough to test without a network.

use std::collections::VecDeque;
use std::pin::Pin;

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};

use super::types::{LlmError, TextStream};

/// OpenAI-style stream terminator payload.
pub const DONE_SENTINEL: &str = "[DONE]";

// =============================================================================
// LINE REASSEMBLY
// =============================================================================

/// Reassembles complete SSE `data:` payloads from arbitrarily chunked bytes.
///
/// Bytes after the last newline stay buffered until the next `push`. Non-data
/// lines (`event:`, comments, blank separators) are dropped.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buf: Vec<u8>,
}

impl SseLineBuffer {
    /// Feed a chunk and drain every `data:` payload completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(newline) = self.buf.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buf.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(payload) = line.strip_prefix("data:") {
                let payload = payload.trim_start();
                if !payload.is_empty() {
                    payloads.push(payload.to_string());
                }
            }
        }
        payloads
    }
}

// =============================================================================
// FRAGMENT STREAM
// =============================================================================

/// Adapt a chunked SSE byte stream into a stream of assistant text fragments.
///
/// `extract` maps one `data:` payload to its text fragment, returning `None`
/// for events that carry no text (pings, block boundaries, usage updates).
/// The stream ends at upstream EOF or the `[DONE]` sentinel; a transport
/// error yields one final `Err` item.
pub fn text_fragment_stream<S, E>(bytes: S, extract: fn(&str) -> Option<String>) -> TextStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    struct Walk<S> {
        bytes: Pin<Box<S>>,
        lines: SseLineBuffer,
        pending: VecDeque<Result<String, LlmError>>,
        done: bool,
        extract: fn(&str) -> Option<String>,
    }

    let walk = Walk {
        bytes: Box::pin(bytes),
        lines: SseLineBuffer::default(),
        pending: VecDeque::new(),
        done: false,
        extract,
    };

    Box::pin(futures::stream::unfold(walk, |mut walk| async move {
        loop {
            if let Some(item) = walk.pending.pop_front() {
                return Some((item, walk));
            }
            if walk.done {
                return None;
            }
            match walk.bytes.next().await {
                Some(Ok(chunk)) => {
                    for payload in walk.lines.push(&chunk) {
                        if payload == DONE_SENTINEL {
                            walk.done = true;
                            break;
                        }
                        if let Some(text) = (walk.extract)(&payload) {
                            if !text.is_empty() {
                                walk.pending.push_back(Ok(text));
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    walk.done = true;
                    walk.pending.push_back(Err(LlmError::ApiRequest(e.to_string())));
                }
                None => walk.done = true,
            }
        }
    }))
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
