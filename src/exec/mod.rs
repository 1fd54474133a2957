//! External tool execution

pub mod maven;
pub mod subprocess;
