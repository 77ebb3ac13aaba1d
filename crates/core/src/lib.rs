//! avdinfo core - shared types
//!
//! Error handling and configuration used by the property file reader
//! and the command line tool.

pub mod config;
pub mod error;

pub use config::{AppConfig, AndroidConfig, LoggingConfig};
pub use error::{AvdInfoError, Result};

/// avdinfo version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "avdinfo";
