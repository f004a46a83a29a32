//! particles-rs library
//!
//! Command definitions and output helpers behind the `particles-rs` binary.

pub mod cli;
pub mod commands;
pub mod utils;
