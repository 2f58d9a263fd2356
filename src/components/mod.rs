//! Small shared presentational components.

pub mod field;
