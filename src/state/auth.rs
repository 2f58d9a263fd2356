#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginData, RegisterData, User};

/// Session presence for the current tab: the in-memory user record and the
/// initial-check flag.
///
/// Authenticated means exactly "a user record is present". The record is
/// ephemeral; a reload starts over from `Default` and the session cookie
/// alone decides what the backend still accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Loading until the on-mount check settles.
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Install the user synthesized from a successful login.
    ///
    /// The backend echoes only a message, so the record is derived from the
    /// submitted form: username is the local part of the email.
    pub fn apply_login(&mut self, data: &LoginData) {
        self.user = Some(User {
            id: "1".to_owned(),
            username: login_username(&data.email),
            email: data.email.clone(),
        });
    }

    /// Install the user synthesized from a successful registration, keeping
    /// the submitted username verbatim.
    pub fn apply_register(&mut self, data: &RegisterData) {
        self.user = Some(User {
            id: "1".to_owned(),
            username: data.username.clone(),
            email: data.email.clone(),
        });
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }
}

/// Local part of an email address, or the whole string when it has no `@`.
pub fn login_username(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}
