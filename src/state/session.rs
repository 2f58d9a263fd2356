//! Reactive session context over [`AuthState`].
//!
//! One `Session` handle is provided at the application root and read by any
//! descendant page. Every mutation goes through the three async methods
//! here; each awaits its HTTP call to completion before touching state, so
//! within a single submit there is never an out-of-order update.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginData, RegisterData, User};
use crate::state::auth::AuthState;

/// Copyable handle to the tab-wide session state.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    /// Create the session signal and provide it as context. Call once, at
    /// the application root.
    pub fn provide() -> Self {
        let session = Self {
            state: RwSignal::new(AuthState::default()),
        };
        provide_context(session);
        session
    }

    /// Fetch the session from context.
    ///
    /// # Panics
    ///
    /// Panics when no provider is mounted above the caller; using the
    /// session outside the application root is a programming error.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Settle the initial mount check. The backend exposes no who-am-I
    /// endpoint, so there is nothing to verify; this only clears `loading`.
    pub fn finish_initial_check(&self) {
        self.state.update(|s| s.loading = false);
    }

    /// Log in and, on success, install the synthesized user.
    ///
    /// # Errors
    ///
    /// Failures from the wire layer propagate unchanged; state is not
    /// touched on failure.
    pub async fn login(&self, data: LoginData) -> Result<(), ApiError> {
        api::login(&data).await?;
        self.state.update(|s| s.apply_login(&data));
        Ok(())
    }

    /// Register and, on success, install the synthesized user.
    ///
    /// # Errors
    ///
    /// Failures from the wire layer propagate unchanged; state is not
    /// touched on failure.
    pub async fn register(&self, data: RegisterData) -> Result<(), ApiError> {
        api::register(&data).await?;
        self.state.update(|s| s.apply_register(&data));
        Ok(())
    }

    /// Log out and, on success, drop the local user.
    ///
    /// # Errors
    ///
    /// On failure the error propagates and the local user is kept, so the
    /// caller can surface the failure and decide whether to retry.
    pub async fn logout(&self) -> Result<(), ApiError> {
        api::logout().await?;
        self.state.update(AuthState::clear_user);
        Ok(())
    }
}
