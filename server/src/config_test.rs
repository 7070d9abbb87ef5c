use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_gateway_env() {
    unsafe {
        std::env::remove_var("CHAT_STREAM_DEADLINE_SECS");
        std::env::remove_var("MATCH_RESULT_LIMIT");
    }
}

#[test]
fn from_env_uses_defaults_when_unset() {
    unsafe { clear_gateway_env() };

    let cfg = GatewayConfig::from_env();
    assert_eq!(cfg, GatewayConfig::default());
    assert_eq!(cfg.chat_deadline_secs, 30);
    assert_eq!(cfg.match_result_limit, 4);
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_gateway_env();
        std::env::set_var("CHAT_STREAM_DEADLINE_SECS", "5");
        std::env::set_var("MATCH_RESULT_LIMIT", "8");
    }

    let cfg = GatewayConfig::from_env();
    assert_eq!(cfg.chat_deadline_secs, 5);
    assert_eq!(cfg.match_result_limit, 8);

    unsafe { clear_gateway_env() };
}

#[test]
fn env_parse_falls_back_on_malformed_value() {
    unsafe { std::env::set_var("MATCH_RESULT_LIMIT", "many") };

    assert_eq!(env_parse("MATCH_RESULT_LIMIT", 4u32), 4);

    unsafe { clear_gateway_env() };
}
