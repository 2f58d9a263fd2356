//! Wire layer for the authentication backend.
//!
//! DESIGN
//! ======
//! `types` holds the request/response bodies, `error` the failure taxonomy,
//! and `api` the thin HTTP wrappers. Nothing here touches the session
//! cookie; the browser cookie jar carries it on every request.

pub mod api;
pub mod error;
pub mod types;
