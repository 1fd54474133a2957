//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod find;
pub mod make;
pub mod print;
pub mod sign;
