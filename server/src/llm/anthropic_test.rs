use super::*;

#[test]
fn delta_text_extracts_text_delta() {
    let payload = serde_json::json!({
        "type": "content_block_delta",
        "index": 0,
        "delta": { "type": "text_delta", "text": "Hello" }
    })
    .to_string();
    assert_eq!(delta_text(&payload).as_deref(), Some("Hello"));
}

#[test]
fn delta_text_skips_non_delta_events() {
    for payload in [
        serde_json::json!({ "type": "message_start", "message": {} }),
        serde_json::json!({ "type": "ping" }),
        serde_json::json!({ "type": "message_delta", "delta": { "stop_reason": "end_turn" } }),
        serde_json::json!({ "type": "content_block_stop", "index": 0 }),
    ] {
        assert_eq!(delta_text(&payload.to_string()), None);
    }
}

#[test]
fn delta_text_skips_non_text_deltas() {
    let payload = serde_json::json!({
        "type": "content_block_delta",
        "index": 0,
        "delta": { "type": "input_json_delta", "partial_json": "{\"a\":" }
    })
    .to_string();
    assert_eq!(delta_text(&payload), None);
}

#[test]
fn delta_text_rejects_malformed_json() {
    assert_eq!(delta_text("not json"), None);
}

#[test]
fn request_body_serializes_stream_flag() {
    let messages = vec![Message { role: "user".into(), content: "hi".into() }];
    let body = ApiRequest {
        model: "claude-sonnet-4-5-20250929",
        max_tokens: 1024,
        system: "You are helpful.",
        messages: &messages,
        stream: true,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["stream"], serde_json::json!(true));
    assert_eq!(json["messages"][0]["role"], serde_json::json!("user"));
}
