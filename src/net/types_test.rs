use super::*;
use serde_json::json;

// =============================================================
// Wire contract: body shapes must match the backend exactly
// =============================================================

#[test]
fn login_body_matches_wire_contract() {
    let body = serde_json::to_value(LoginData {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    })
    .expect("serialize login body");
    assert_eq!(body, json!({"email": "a@b.com", "password": "x"}));
}

#[test]
fn register_body_matches_wire_contract() {
    let body = serde_json::to_value(RegisterData {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "pw".to_owned(),
    })
    .expect("serialize register body");
    assert_eq!(
        body,
        json!({"username": "alice", "email": "alice@example.com", "password": "pw"})
    );
}

#[test]
fn auth_response_reads_message_field() {
    let resp: AuthResponse =
        serde_json::from_value(json!({"message": "Login successful"})).expect("deserialize");
    assert_eq!(resp.message, "Login successful");
}
