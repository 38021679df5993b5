use super::*;

#[test]
fn session_endpoint_is_under_api() {
    assert_eq!(SESSION_ENDPOINT, "/api/session");
}

#[test]
fn session_request_failed_message_formats_status() {
    assert_eq!(session_request_failed_message(503), "session request failed: 503");
}

