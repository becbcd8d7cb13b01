//! CLI command implementations

pub mod demo;
pub mod section;
pub mod write;
