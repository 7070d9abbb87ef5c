//! Streamed chat transport.
//!
//! DESIGN
//! ======
//! The chat gateway replies with chunked plaintext. The browser read loop
//! hands each raw chunk to [`StreamedText`], which re-decodes the whole
//! accumulated buffer per chunk; the caller receives the full cumulative
//! text every time and replaces the placeholder content wholesale. The
//! decode behavior is pure and tested off the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "chat_stream_test.rs"]
mod chat_stream_test;

use crate::state::conversation::ChatMessage;

// =============================================================
// CUMULATIVE DECODE
// =============================================================

/// Accumulates raw response bytes and decodes the whole buffer after each
/// push. A multi-byte UTF-8 sequence split across chunks shows up as a
/// replacement character until its tail arrives, then decodes cleanly on
/// the next push.
#[derive(Debug, Default)]
pub struct StreamedText {
    bytes: Vec<u8>,
}

impl StreamedText {
    /// Append a chunk and return the full decoded text so far.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.bytes.extend_from_slice(chunk);
        self.text()
    }

    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

// =============================================================
// GATEWAY CALL
// =============================================================

/// POST the transcript to `/api/chat` and consume the streamed reply.
///
/// `on_started` fires once after a success status, before the first read;
/// `on_update` receives the cumulative assistant text after each chunk.
/// Resolves when the stream closes.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-success status, or
/// a failed mid-stream read.
#[cfg(feature = "csr")]
pub async fn stream_chat(
    messages: &[ChatMessage],
    on_started: impl FnOnce(),
    mut on_update: impl FnMut(String),
) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::types::chat_request_json;

    let resp = gloo_net::http::Request::post("/api/chat")
        .header("Content-Type", "application/json")
        .body(chat_request_json(messages))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("chat request failed: {}", resp.status()));
    }

    on_started();

    let Some(body) = resp.body() else {
        return Ok(());
    };
    let reader: web_sys::ReadableStreamDefaultReader = body.get_reader().unchecked_into();

    let mut streamed = StreamedText::default();
    loop {
        let step = JsFuture::from(reader.read())
            .await
            .map_err(|_| "stream read failed".to_owned())?;
        let done = js_sys::Reflect::get(&step, &"done".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }
        let value =
            js_sys::Reflect::get(&step, &"value".into()).map_err(|_| "stream read failed".to_owned())?;
        let chunk = js_sys::Uint8Array::new(&value).to_vec();
        on_update(streamed.push(&chunk));
    }
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub async fn stream_chat(
    messages: &[ChatMessage],
    _on_started: impl FnOnce(),
    _on_update: impl FnMut(String),
) -> Result<(), String> {
    let _ = messages;
    Err("not available off the browser".to_owned())
}
