use super::*;

#[test]
fn error_message_prefers_error_field() {
    let body = r#"{"error":"invalid email or password","message":"ignored"}"#;
    assert_eq!(error_message_from_body("login", 401, body), "invalid email or password");
}

#[test]
fn error_message_uses_message_field() {
    assert_eq!(error_message_from_body("login", 400, r#"{"message":"bad input"}"#), "bad input");
}

#[test]
fn error_message_skips_blank_fields() {
    assert_eq!(error_message_from_body("login", 500, r#"{"error":"  "}"#), "login failed: 500");
}

#[test]
fn error_message_uses_short_plain_text_body() {
    assert_eq!(error_message_from_body("user list", 403, "forbidden"), "forbidden");
}

#[test]
fn error_message_ignores_html_body() {
    let body = "<html><body>Bad Gateway</body></html>";
    assert_eq!(error_message_from_body("company list", 502, body), "company list failed: 502");
}

#[test]
fn error_message_falls_back_on_empty_body() {
    assert_eq!(error_message_from_body("login", 401, ""), "login failed: 401");
}

#[test]
fn error_message_ignores_unrelated_json() {
    assert_eq!(error_message_from_body("login", 418, r#"{"ok":false}"#), "login failed: 418");
}
