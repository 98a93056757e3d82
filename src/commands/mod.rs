//! CLI command implementations

pub mod button;
pub mod list;
