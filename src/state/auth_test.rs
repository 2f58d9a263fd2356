use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn default_state_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Login / register transitions
// =============================================================

#[test]
fn login_synthesizes_user_from_email_local_part() {
    let mut state = AuthState::default();
    state.apply_login(&LoginData {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    });

    let user = state.user.expect("user after login");
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "a");
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn login_marks_state_authenticated() {
    let mut state = AuthState::default();
    state.apply_login(&LoginData {
        email: "operator@example.com".to_owned(),
        password: "pw".to_owned(),
    });
    assert!(state.is_authenticated());
}

#[test]
fn register_keeps_submitted_username_verbatim() {
    let mut state = AuthState::default();
    state.apply_register(&RegisterData {
        username: "Alice.B".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "pw".to_owned(),
    });

    let user = state.user.expect("user after register");
    assert_eq!(user.username, "Alice.B");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn clear_user_returns_to_unauthenticated() {
    let mut state = AuthState::default();
    state.apply_login(&LoginData {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
    });
    state.clear_user();

    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Username derivation
// =============================================================

#[test]
fn login_username_takes_text_before_at() {
    assert_eq!(login_username("alice@example.com"), "alice");
}

#[test]
fn login_username_without_at_keeps_whole_string() {
    assert_eq!(login_username("operator"), "operator");
}

#[test]
fn login_username_with_multiple_ats_takes_first_segment() {
    assert_eq!(login_username("a@b@c"), "a");
}
