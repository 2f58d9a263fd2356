#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::net::error::{ApiError, ERR_NETWORK};

pub const INVALID_CREDENTIALS: &str =
    "Invalid email or password. Please check your credentials.";
pub const USER_NOT_FOUND: &str = "User not found. Please check your email address.";
pub const SERVER_UNREACHABLE: &str =
    "Network error. Please check if the server is running.";

/// Map an API failure to user-facing text.
///
/// Fixed precedence: 401, then 404, then any other HTTP status; a transport
/// failure with [`ERR_NETWORK`] gets its own message; everything else falls
/// through to the generic "try again" line for the given action.
pub fn error_message(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 401, .. } => INVALID_CREDENTIALS.to_owned(),
        ApiError::Http { status: 404, .. } => USER_NOT_FOUND.to_owned(),
        ApiError::Network { code } if code == ERR_NETWORK => SERVER_UNREACHABLE.to_owned(),
        ApiError::Http { .. } | ApiError::Network { .. } => {
            format!("{action} failed. Please try again.")
        }
    }
}

pub fn login_error(err: &ApiError) -> String {
    error_message("Login", err)
}

pub fn register_error(err: &ApiError) -> String {
    error_message("Registration", err)
}

pub fn logout_error(err: &ApiError) -> String {
    error_message("Sign out", err)
}
