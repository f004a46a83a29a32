//! Shared helpers for the tf-particles crates

pub mod debug;
