use super::*;

#[test]
fn signin_endpoint_defaults_to_fixed_host() {
    if option_env!("WALLET_SIGNIN_URL").is_none() {
        assert_eq!(signin_endpoint(), "https://povshy.github.io/pov24/signin");
    }
}

#[test]
fn raw_response_ok_covers_2xx_only() {
    let resp = |status| RawResponse { status, body: String::new() };
    assert!(resp(200).ok());
    assert!(resp(204).ok());
    assert!(resp(299).ok());
    assert!(!resp(199).ok());
    assert!(!resp(300).ok());
    assert!(!resp(401).ok());
    assert!(!resp(500).ok());
}

#[test]
fn browser_transport_is_unavailable_off_browser() {
    let body = serde_json::json!({"email": "a@b.com", "password": "x"});
    let result = futures::executor::block_on(BrowserTransport.post_json(DEFAULT_SIGNIN_ENDPOINT, &body));
    assert_eq!(result, Err("not available on server".to_owned()));
}

#[test]
fn failure_description_prefers_js_message() {
    assert_eq!(
        failure_description(Some("Failed to fetch".to_owned()), "TypeError: Failed to fetch".to_owned()),
        "Failed to fetch"
    );
}

#[test]
fn failure_description_keeps_empty_js_message() {
    assert_eq!(failure_description(Some(String::new()), "TypeError".to_owned()), "");
}

#[test]
fn failure_description_falls_back_to_display() {
    assert_eq!(
        failure_description(None, "Serialization error: key must be a string".to_owned()),
        "Serialization error: key must be a string"
    );
}
