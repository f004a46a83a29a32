//! Command implementations

pub mod camera;
pub mod config;
pub mod mesh;
pub mod simulate;
