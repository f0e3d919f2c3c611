//! meshstat library
//!
//! Command definitions and report helpers behind the `meshstat` binary.

pub mod cli;
pub mod commands;
pub mod utils;
