//! Page components.
//!
//! Each page owns its transient form state and maps API failures to display
//! text through `feedback`, the single error-to-message point.

pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod register;
