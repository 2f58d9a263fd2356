//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `auth` holds the plain state struct with its pure transitions so logic
//! stays natively testable; `session` wraps it in a reactive context and
//! owns every mutation path.

pub mod auth;
pub mod session;
