use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_default_is_empty() {
    let creds = Credentials::default();
    assert!(creds.email.is_empty());
    assert!(creds.password.is_empty());
}

#[test]
fn credentials_serialize_to_request_body() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "hunter2"}));
}

// =============================================================
// SigninResponse
// =============================================================

#[test]
fn signin_response_parses_success_body() {
    let raw = r#"{"id":"42","session":{"token":"abc","user":{"name":"A"}}}"#;
    let resp: SigninResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.id, serde_json::json!("42"));
    assert_eq!(resp.session.token, "abc");
    assert_eq!(resp.session.user, serde_json::json!({"name": "A"}));
}

#[test]
fn signin_response_missing_session_is_error() {
    let raw = r#"{"id":"42"}"#;
    assert!(serde_json::from_str::<SigninResponse>(raw).is_err());
}

#[test]
fn balance_route_uses_bare_string_id() {
    let raw = r#"{"id":"42","session":{"token":"t","user":null}}"#;
    let resp: SigninResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.balance_route(), "/balance/42");
}

#[test]
fn balance_route_uses_numeric_id_text() {
    let raw = r#"{"id":7,"session":{"token":"t","user":null}}"#;
    let resp: SigninResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.balance_route(), "/balance/7");
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_parses_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"invalid credentials"}"#).unwrap();
    assert_eq!(body.message, "invalid credentials");
}

#[test]
fn error_body_ignores_extra_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"nope","code":401}"#).unwrap();
    assert_eq!(body.message, "nope");
}

#[test]
fn error_body_without_message_is_empty() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"bad"}"#).unwrap();
    assert_eq!(body.message, "");
}
