use super::*;

// ===== line reassembly =====

#[test]
fn buffer_drains_complete_data_lines() {
    let mut buf = SseLineBuffer::default();
    let payloads = buf.push(b"data: {\"a\":1}\n\ndata: {\"b\":2}\n");
    assert_eq!(payloads, vec!["{\"a\":1}", "{\"b\":2}"]);
}

#[test]
fn buffer_holds_partial_line_across_chunks() {
    let mut buf = SseLineBuffer::default();
    assert!(buf.push(b"data: {\"text\":\"hel").is_empty());
    let payloads = buf.push(b"lo\"}\n");
    assert_eq!(payloads, vec!["{\"text\":\"hello\"}"]);
}

#[test]
fn buffer_trims_crlf_line_endings() {
    let mut buf = SseLineBuffer::default();
    let payloads = buf.push(b"data: one\r\ndata: two\r\n");
    assert_eq!(payloads, vec!["one", "two"]);
}

#[test]
fn buffer_ignores_event_and_comment_lines() {
    let mut buf = SseLineBuffer::default();
    let payloads = buf.push(b"event: content_block_delta\n: keep-alive\ndata: x\n");
    assert_eq!(payloads, vec!["x"]);
}

#[test]
fn buffer_ignores_empty_data_payload() {
    let mut buf = SseLineBuffer::default();
    assert!(buf.push(b"data:\ndata: \n").is_empty());
}

// ===== fragment stream =====

fn take_text(payload: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(payload)
        .ok()?
        .get("text")?
        .as_str()
        .map(str::to_owned)
}

fn chunks(parts: &[&str]) -> Vec<Result<Bytes, std::io::Error>> {
    parts
        .iter()
        .map(|p| Ok(Bytes::copy_from_slice(p.as_bytes())))
        .collect()
}

#[tokio::test]
async fn fragment_stream_reassembles_split_events() {
    let bytes = futures::stream::iter(chunks(&[
        "data: {\"text\":\"Hel",
        "lo\"}\ndata: {\"text\":\" there\"}\n",
    ]));
    let fragments: Vec<_> = text_fragment_stream(bytes, take_text).collect().await;

    let texts: Vec<String> = fragments.into_iter().map(Result::unwrap).collect();
    assert_eq!(texts, vec!["Hello", " there"]);
}

#[tokio::test]
async fn fragment_stream_stops_at_done_sentinel() {
    let bytes = futures::stream::iter(chunks(&[
        "data: {\"text\":\"a\"}\ndata: [DONE]\ndata: {\"text\":\"after\"}\n",
    ]));
    let fragments: Vec<_> = text_fragment_stream(bytes, take_text).collect().await;

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].as_ref().unwrap(), "a");
}

#[tokio::test]
async fn fragment_stream_skips_textless_events() {
    let bytes = futures::stream::iter(chunks(&[
        "data: {\"type\":\"ping\"}\ndata: {\"text\":\"x\"}\ndata: not json\n",
    ]));
    let fragments: Vec<_> = text_fragment_stream(bytes, take_text).collect().await;

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].as_ref().unwrap(), "x");
}

#[tokio::test]
async fn fragment_stream_surfaces_transport_error_then_ends() {
    let bytes = futures::stream::iter(vec![
        Ok(Bytes::from_static(b"data: {\"text\":\"a\"}\n")),
        Err(std::io::Error::other("connection reset")),
    ]);
    let fragments: Vec<_> = text_fragment_stream(bytes, take_text).collect().await;

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].as_ref().unwrap(), "a");
    let err = fragments[1].as_ref().unwrap_err().to_string();
    assert!(err.contains("connection reset"));
}
