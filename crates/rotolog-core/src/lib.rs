//! Rotolog Core - Shared types, configuration, and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod level;

pub use config::{ConfigFile, ConfigFormat, LogConfig};
pub use error::{Error, Result};
pub use level::{Level, Verbosity};
