use super::*;

fn http(status: u16) -> ApiError {
    ApiError::Http {
        status,
        body: String::new(),
    }
}

// =============================================================
// Exact messages per status
// =============================================================

#[test]
fn status_401_yields_invalid_credentials() {
    assert_eq!(
        login_error(&http(401)),
        "Invalid email or password. Please check your credentials."
    );
}

#[test]
fn status_404_yields_user_not_found() {
    assert_eq!(
        login_error(&http(404)),
        "User not found. Please check your email address."
    );
}

#[test]
fn other_http_statuses_yield_generic_login_message() {
    for status in [400, 409, 500, 503] {
        assert_eq!(login_error(&http(status)), "Login failed. Please try again.");
    }
}

#[test]
fn err_network_yields_server_unreachable() {
    assert_eq!(
        login_error(&ApiError::network(ERR_NETWORK)),
        "Network error. Please check if the server is running."
    );
}

#[test]
fn unknown_network_code_yields_generic_message() {
    assert_eq!(
        login_error(&ApiError::network("ERR_CANCELED")),
        "Login failed. Please try again."
    );
}

// =============================================================
// Per-action wording
// =============================================================

#[test]
fn register_and_logout_use_their_own_action_word() {
    assert_eq!(
        register_error(&http(500)),
        "Registration failed. Please try again."
    );
    assert_eq!(
        logout_error(&http(500)),
        "Sign out failed. Please try again."
    );
}

#[test]
fn credential_messages_are_shared_across_actions() {
    assert_eq!(register_error(&http(401)), login_error(&http(401)));
    assert_eq!(register_error(&http(404)), login_error(&http(404)));
}
